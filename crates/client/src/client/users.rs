//! User API operations.

use async_trait::async_trait;
use meetprep_core::meeting::User;
use meetprep_core::provider::{self, Page, UserProvider};

use super::MeetprepClient;
use crate::error::Result;

impl MeetprepClient {
    /// List user profiles in a page window.
    pub async fn fetch_users(&self, page: Page) -> Result<Vec<User>> {
        let response = self
            .client
            .get(self.url("/users/"))
            .query(&page)
            .send()
            .await?;
        self.handle_response(response, "Users", "list").await
    }
}

#[async_trait]
impl UserProvider for MeetprepClient {
    async fn list_users(&self, page: Page) -> provider::Result<Vec<User>> {
        Ok(self.fetch_users(page).await?)
    }
}
