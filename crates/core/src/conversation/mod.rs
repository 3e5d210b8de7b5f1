mod types;

pub use types::{Author, ChatMessage, Conversation};
