//! Client error types.

use meetprep_core::provider::ProviderError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClientError> for ProviderError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Request(e) if e.is_decode() => ProviderError::Decode(e.to_string()),
            ClientError::Request(e) => ProviderError::Transport(e.to_string()),
            ClientError::ServerError { status, message } => {
                ProviderError::Status { status, message }
            }
            ClientError::NotFound { entity_type, id } => {
                ProviderError::NotFound { entity_type, id }
            }
            ClientError::Json(e) => ProviderError::Decode(e.to_string()),
            ClientError::InvalidConfig(message) => ProviderError::Transport(message),
        }
    }
}
