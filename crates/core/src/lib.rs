//! meetprep_core - functional core for the meetprep assistant.
//!
//! Pure meeting/agenda logic plus the async ports the outer crates implement.

pub mod agenda;
pub mod conversation;
pub mod meeting;
pub mod provider;
pub mod serde;
pub mod session;
