//! HTTP client for the meetings backend.

pub mod agenda;
pub mod conversations;
pub mod meetings;
pub mod users;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// HTTP client for the meetings backend.
///
/// Implements the provider ports of `meetprep_core`, so a
/// [`PrepSession`](meetprep_core::session::PrepSession) can run on top of it.
#[derive(Debug, Clone)]
pub struct MeetprepClient {
    client: reqwest::Client,
    base_url: String,
}

impl MeetprepClient {
    /// Create a new client from a validated config.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a successful response or map the error status.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        entity_type: &'static str,
        id: impl ToString,
    ) -> Result<T> {
        let response = Self::check_status(response, entity_type, id).await?;
        response.json().await.map_err(ClientError::from)
    }

    /// Map the error status of a response whose body is not needed.
    async fn handle_empty_response(
        &self,
        response: reqwest::Response,
        entity_type: &'static str,
        id: impl ToString,
    ) -> Result<()> {
        Self::check_status(response, entity_type, id).await?;
        Ok(())
    }

    async fn check_status(
        response: reqwest::Response,
        entity_type: &'static str,
        id: impl ToString,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        tracing::debug!(status = status.as_u16(), url = %response.url(), "Request failed");
        if status == reqwest::StatusCode::NOT_FOUND {
            Err(ClientError::NotFound {
                entity_type,
                id: id.to_string(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
