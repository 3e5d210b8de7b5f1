//! In-memory provider implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::agenda::AgendaItem;
use crate::conversation::{Author, ChatMessage, Conversation};
use crate::meeting::{Meeting, MeetingDetails, MeetingId, NewMeeting, User, UserId};

use super::{
    AgendaStore, ConversationProvider, MeetingProvider, Page, ProviderError, Result, UserProvider,
};

/// In-memory backend for tests and offline use.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Conversations are started empty; no assistant replies are generated.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    meetings: Arc<RwLock<HashMap<MeetingId, MeetingDetails>>>,
    conversations: Arc<RwLock<HashMap<(MeetingId, UserId), Conversation>>>,
    agendas: Arc<RwLock<HashMap<MeetingId, Vec<AgendaItem>>>>,
}

impl InMemoryBackend {
    /// Creates a new empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a user profile.
    pub async fn insert_user(&self, user: User) {
        let mut users = self.users.write().await;
        users.insert(user.id, user);
    }

    /// Adds or replaces a meeting.
    pub async fn insert_meeting(&self, details: MeetingDetails) {
        let mut meetings = self.meetings.write().await;
        meetings.insert(details.meeting.id, details);
    }

    /// Adds or replaces a conversation.
    pub async fn insert_conversation(&self, conversation: Conversation) {
        let mut conversations = self.conversations.write().await;
        conversations.insert(
            (conversation.meeting_id, conversation.user_id),
            conversation,
        );
    }

    /// Returns the last saved agenda of a meeting.
    pub async fn saved_agenda(&self, meeting_id: MeetingId) -> Option<Vec<AgendaItem>> {
        let agendas = self.agendas.read().await;
        agendas.get(&meeting_id).cloned()
    }

    async fn ensure_meeting(&self, id: MeetingId) -> Result<()> {
        let meetings = self.meetings.read().await;
        if meetings.contains_key(&id) {
            Ok(())
        } else {
            Err(ProviderError::not_found("Meeting", id))
        }
    }
}

fn paged<T>(items: Vec<T>, page: Page) -> Vec<T> {
    items
        .into_iter()
        .skip(page.skip as usize)
        .take(page.limit as usize)
        .collect()
}

#[async_trait]
impl UserProvider for InMemoryBackend {
    async fn list_users(&self, page: Page) -> Result<Vec<User>> {
        let users = self.users.read().await;
        let mut listed: Vec<User> = users.values().cloned().collect();
        listed.sort_by_key(|user| user.id);
        Ok(paged(listed, page))
    }
}

#[async_trait]
impl MeetingProvider for InMemoryBackend {
    async fn list_meetings(&self, page: Page) -> Result<Vec<Meeting>> {
        let meetings = self.meetings.read().await;
        let mut listed: Vec<Meeting> = meetings.values().map(|d| d.meeting.clone()).collect();
        listed.sort_by_key(|meeting| meeting.id);
        Ok(paged(listed, page))
    }

    async fn get_meeting(&self, id: MeetingId) -> Result<MeetingDetails> {
        let meetings = self.meetings.read().await;
        meetings
            .get(&id)
            .cloned()
            .ok_or_else(|| ProviderError::not_found("Meeting", id))
    }

    async fn create_meeting(&self, meeting: &NewMeeting) -> Result<Meeting> {
        let mut meetings = self.meetings.write().await;
        let id = MeetingId(meetings.keys().map(|id| id.0).max().unwrap_or(0) + 1);
        let created = meeting.clone().into_meeting(id);
        meetings.insert(id, MeetingDetails::new(created.clone(), Vec::new()));
        tracing::debug!(meeting_id = %id, "Created meeting");
        Ok(created)
    }
}

#[async_trait]
impl ConversationProvider for InMemoryBackend {
    async fn get_conversation(
        &self,
        meeting_id: MeetingId,
        user_id: UserId,
    ) -> Result<Conversation> {
        self.ensure_meeting(meeting_id).await?;

        let mut conversations = self.conversations.write().await;
        if let Some(conversation) = conversations.get(&(meeting_id, user_id)) {
            return Ok(conversation.clone());
        }

        let mut conversation = Conversation::new(meeting_id, user_id);
        if let Some(agenda) = self.agendas.read().await.get(&meeting_id) {
            conversation.meeting_agenda = agenda.clone();
        }
        conversations.insert((meeting_id, user_id), conversation.clone());
        Ok(conversation)
    }

    async fn send_message(
        &self,
        meeting_id: MeetingId,
        user_id: UserId,
        message: &str,
    ) -> Result<Conversation> {
        let mut conversations = self.conversations.write().await;
        let conversation = conversations
            .get_mut(&(meeting_id, user_id))
            .ok_or_else(|| {
                ProviderError::not_found("Conversation", format!("{meeting_id}/{user_id}"))
            })?;

        conversation.chat_messages.push(ChatMessage::new(
            Author::User,
            message,
            crate::serde::now(),
        ));
        Ok(conversation.clone())
    }
}

#[async_trait]
impl AgendaStore for InMemoryBackend {
    async fn save_agenda(&self, meeting_id: MeetingId, items: &[AgendaItem]) -> Result<()> {
        self.ensure_meeting(meeting_id).await?;

        let mut conversations = self.conversations.write().await;
        for conversation in conversations
            .values_mut()
            .filter(|c| c.meeting_id == meeting_id)
        {
            conversation.meeting_agenda = items.to_vec();
        }

        let mut agendas = self.agendas.write().await;
        agendas.insert(meeting_id, items.to_vec());
        Ok(())
    }
}
