//! meetprep_client - HTTP adapter and CLI for the meetprep backend.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;

pub use client::MeetprepClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
