//! Conversation API operations.

use async_trait::async_trait;
use meetprep_core::conversation::Conversation;
use meetprep_core::meeting::{MeetingId, UserId};
use meetprep_core::provider::{self, ConversationProvider};

use super::MeetprepClient;
use crate::error::Result;

impl MeetprepClient {
    /// Get (or start) the conversation of a user for a meeting.
    pub async fn fetch_conversation(
        &self,
        meeting_id: MeetingId,
        user_id: UserId,
    ) -> Result<Conversation> {
        let response = self
            .client
            .get(self.url(&format!(
                "/meetings/{}/{}/conversation",
                meeting_id, user_id
            )))
            .send()
            .await?;
        self.handle_response(response, "Conversation", format!("{meeting_id}/{user_id}"))
            .await
    }

    /// Post a user message to a conversation.
    pub async fn post_message(
        &self,
        meeting_id: MeetingId,
        user_id: UserId,
        message: &str,
    ) -> Result<Conversation> {
        tracing::debug!(%meeting_id, %user_id, len = message.len(), "Posting message");
        let response = self
            .client
            .post(self.url(&format!(
                "/meetings/{}/{}/conversation/message",
                meeting_id, user_id
            )))
            .query(&[("message", message)])
            .send()
            .await?;
        self.handle_response(response, "Conversation", format!("{meeting_id}/{user_id}"))
            .await
    }
}

#[async_trait]
impl ConversationProvider for MeetprepClient {
    async fn get_conversation(
        &self,
        meeting_id: MeetingId,
        user_id: UserId,
    ) -> provider::Result<Conversation> {
        Ok(self.fetch_conversation(meeting_id, user_id).await?)
    }

    async fn send_message(
        &self,
        meeting_id: MeetingId,
        user_id: UserId,
        message: &str,
    ) -> provider::Result<Conversation> {
        Ok(self.post_message(meeting_id, user_id, message).await?)
    }
}
