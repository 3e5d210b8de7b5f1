//! Meeting API operations.

use async_trait::async_trait;
use meetprep_core::meeting::{Meeting, MeetingDetails, MeetingId, NewMeeting};
use meetprep_core::provider::{self, MeetingProvider, Page};

use super::MeetprepClient;
use crate::error::Result;

impl MeetprepClient {
    /// List meetings in a page window.
    pub async fn fetch_meetings(&self, page: Page) -> Result<Vec<Meeting>> {
        tracing::debug!(skip = page.skip, limit = page.limit, "Fetching meetings");
        let response = self
            .client
            .get(self.url("/meetings/"))
            .query(&page)
            .send()
            .await?;
        self.handle_response(response, "Meetings", "list").await
    }

    /// Get meeting details by ID.
    pub async fn fetch_meeting(&self, id: MeetingId) -> Result<MeetingDetails> {
        let response = self
            .client
            .get(self.url(&format!("/meetings/{}", id)))
            .send()
            .await?;
        self.handle_response(response, "Meeting", id).await
    }

    /// Schedule a new meeting.
    pub async fn post_meeting(&self, meeting: &NewMeeting) -> Result<Meeting> {
        let response = self
            .client
            .post(self.url("/meetings/"))
            .json(meeting)
            .send()
            .await?;
        let created: Meeting = self.handle_response(response, "Meetings", "new").await?;
        tracing::debug!(meeting_id = %created.id, "Created meeting");
        Ok(created)
    }
}

#[async_trait]
impl MeetingProvider for MeetprepClient {
    async fn list_meetings(&self, page: Page) -> provider::Result<Vec<Meeting>> {
        Ok(self.fetch_meetings(page).await?)
    }

    async fn get_meeting(&self, id: MeetingId) -> provider::Result<MeetingDetails> {
        Ok(self.fetch_meeting(id).await?)
    }

    async fn create_meeting(&self, meeting: &NewMeeting) -> provider::Result<Meeting> {
        Ok(self.post_meeting(meeting).await?)
    }
}
