//! Client configuration with validation.

use std::time::Duration;

use meetprep_core::meeting::UserId;
use url::Url;

use crate::error::{ClientError, Result};

/// Backend URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Profile selected when none is configured.
pub const DEFAULT_USER_ID: i64 = 2;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Validated settings for talking to the meetings backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub base_url: String,
    /// Profile whose conversations and agendas are used.
    pub user_id: UserId,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create and validate a config.
    pub fn new(base_url: &str, user_id: i64, timeout_ms: u64) -> Result<Self> {
        let parsed = Url::parse(base_url.trim())
            .map_err(|e| ClientError::InvalidConfig(format!("base URL {base_url:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidConfig(format!(
                "base URL must use http or https, got {}",
                parsed.scheme()
            )));
        }
        if timeout_ms == 0 {
            return Err(ClientError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            user_id: UserId(user_id),
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    /// Create with defaults for the given base URL.
    pub fn with_defaults(base_url: &str) -> Result<Self> {
        Self::new(base_url, DEFAULT_USER_ID, DEFAULT_TIMEOUT_MS)
    }
}
