use async_trait::async_trait;

use crate::agenda::AgendaItem;
use crate::conversation::Conversation;
use crate::meeting::{Meeting, MeetingDetails, MeetingId, NewMeeting, User, UserId};

use super::{Page, Result};

/// Source of scheduled meetings.
#[async_trait]
pub trait MeetingProvider: Send + Sync {
    /// Lists meetings in the given page window.
    async fn list_meetings(&self, page: Page) -> Result<Vec<Meeting>>;

    /// Gets a meeting with its participants.
    async fn get_meeting(&self, id: MeetingId) -> Result<MeetingDetails>;

    /// Schedules a meeting and returns it with its assigned id.
    async fn create_meeting(&self, meeting: &NewMeeting) -> Result<Meeting>;
}

/// Source of the user profiles a session can act as.
#[async_trait]
pub trait UserProvider: Send + Sync {
    /// Lists users in the given page window.
    async fn list_users(&self, page: Page) -> Result<Vec<User>>;
}

/// Source of prep conversations and their agendas.
#[async_trait]
pub trait ConversationProvider: Send + Sync {
    /// Gets the conversation of a user for a meeting, starting one if needed.
    async fn get_conversation(
        &self,
        meeting_id: MeetingId,
        user_id: UserId,
    ) -> Result<Conversation>;

    /// Posts a user message and returns the updated conversation.
    async fn send_message(
        &self,
        meeting_id: MeetingId,
        user_id: UserId,
        message: &str,
    ) -> Result<Conversation>;
}

/// Persistence for agenda order and completion.
#[async_trait]
pub trait AgendaStore: Send + Sync {
    /// Replaces the agenda of a meeting with the given ordered items.
    async fn save_agenda(&self, meeting_id: MeetingId, items: &[AgendaItem]) -> Result<()>;
}
