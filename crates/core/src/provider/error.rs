use thiserror::Error;

/// Errors surfaced by meeting, conversation and agenda providers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Transport failed: {0}")]
    Transport(String),
    #[error("Could not decode response: {0}")]
    Decode(String),
}

impl ProviderError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        ProviderError::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
