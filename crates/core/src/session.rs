//! Per-user prep session.
//!
//! Holds the selected user and the agenda currently being edited. The
//! backend is injected, so the same session drives the HTTP client and the
//! in-memory backend.

use std::sync::Arc;

use thiserror::Error;

use crate::agenda::{self, AgendaItem, NotesError, ReorderError};
use crate::meeting::{bucketize, MeetingId, User, UserId, WeekBuckets};
use crate::provider::{
    AgendaStore, ConversationProvider, MeetingProvider, Page, ProviderError, UserProvider,
};

/// Errors raised by session operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No agenda loaded; open a meeting first")]
    NoAgendaLoaded,
    #[error(transparent)]
    Reorder(#[from] ReorderError),
    #[error(transparent)]
    Notes(#[from] NotesError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone)]
struct LoadedAgenda {
    meeting_id: MeetingId,
    items: Vec<AgendaItem>,
    dirty: bool,
}

/// The meetings and agenda state of one selected user.
pub struct PrepSession<B> {
    backend: Arc<B>,
    user_id: UserId,
    agenda: Option<LoadedAgenda>,
}

impl<B> PrepSession<B>
where
    B: UserProvider + MeetingProvider + ConversationProvider + AgendaStore,
{
    pub fn new(backend: Arc<B>, user_id: UserId) -> Self {
        Self {
            backend,
            user_id,
            agenda: None,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Lists the profiles that can be selected.
    pub async fn users(&self, page: Page) -> Result<Vec<User>> {
        let users = self.backend.list_users(page).await?;
        tracing::debug!(count = users.len(), "Loaded users");
        Ok(users)
    }

    /// Switches to another user profile, dropping any loaded agenda.
    pub fn select_user(&mut self, user_id: UserId) {
        if user_id != self.user_id {
            tracing::debug!(from = %self.user_id, to = %user_id, "Switching user");
            self.agenda = None;
        }
        self.user_id = user_id;
    }

    /// Loads meetings and groups them by ISO week and weekday.
    pub async fn meetings_by_week(&self, page: Page) -> Result<WeekBuckets> {
        let meetings = self.backend.list_meetings(page).await?;
        tracing::debug!(count = meetings.len(), "Loaded meetings");
        Ok(bucketize(&meetings))
    }

    /// Loads the agenda of a meeting from the user's conversation.
    pub async fn open_meeting(&mut self, meeting_id: MeetingId) -> Result<&[AgendaItem]> {
        let conversation = self
            .backend
            .get_conversation(meeting_id, self.user_id)
            .await?;
        tracing::debug!(
            meeting_id = %meeting_id,
            user_id = %self.user_id,
            items = conversation.meeting_agenda.len(),
            "Opened meeting agenda"
        );

        let loaded = self.agenda.insert(LoadedAgenda {
            meeting_id,
            items: conversation.meeting_agenda,
            dirty: false,
        });
        Ok(&loaded.items)
    }

    /// Meeting whose agenda is loaded, if any.
    pub fn meeting_id(&self) -> Option<MeetingId> {
        self.agenda.as_ref().map(|a| a.meeting_id)
    }

    /// The loaded agenda items in their current order.
    pub fn agenda(&self) -> Option<&[AgendaItem]> {
        self.agenda.as_ref().map(|a| a.items.as_slice())
    }

    /// True when the loaded agenda has changes not yet saved.
    pub fn has_unsaved_changes(&self) -> bool {
        self.agenda.as_ref().is_some_and(|a| a.dirty)
    }

    /// Moves an agenda item from one position to another.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<&[AgendaItem]> {
        let loaded = self.agenda.as_mut().ok_or(SessionError::NoAgendaLoaded)?;
        let items = agenda::reorder(&loaded.items, from, to)?;
        if from != to {
            loaded.dirty = true;
        }
        loaded.items = items;
        Ok(&loaded.items)
    }

    /// Checks or unchecks an agenda item.
    pub fn toggle_item(&mut self, index: usize) -> Result<&[AgendaItem]> {
        let loaded = self.agenda.as_mut().ok_or(SessionError::NoAgendaLoaded)?;
        loaded.items = agenda::toggle(&loaded.items, index)?;
        loaded.dirty = true;
        Ok(&loaded.items)
    }

    /// Persists the loaded agenda.
    pub async fn save(&mut self) -> Result<()> {
        let loaded = self.agenda.as_mut().ok_or(SessionError::NoAgendaLoaded)?;
        self.backend
            .save_agenda(loaded.meeting_id, &loaded.items)
            .await?;
        loaded.dirty = false;
        tracing::info!(
            meeting_id = %loaded.meeting_id,
            items = loaded.items.len(),
            "Saved agenda"
        );
        Ok(())
    }
}
