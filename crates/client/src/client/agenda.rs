//! Agenda API operations.

use async_trait::async_trait;
use meetprep_core::agenda::AgendaItem;
use meetprep_core::meeting::MeetingId;
use meetprep_core::provider::{self, AgendaStore};

use super::MeetprepClient;
use crate::error::Result;

impl MeetprepClient {
    /// Replace the agenda of a meeting.
    pub async fn put_agenda(&self, meeting_id: MeetingId, items: &[AgendaItem]) -> Result<()> {
        let response = self
            .client
            .put(self.url(&format!("/meetings/{}/agenda", meeting_id)))
            .json(items)
            .send()
            .await?;
        self.handle_empty_response(response, "Meeting", meeting_id).await
    }
}

#[async_trait]
impl AgendaStore for MeetprepClient {
    async fn save_agenda(
        &self,
        meeting_id: MeetingId,
        items: &[AgendaItem],
    ) -> provider::Result<()> {
        Ok(self.put_agenda(meeting_id, items).await?)
    }
}
