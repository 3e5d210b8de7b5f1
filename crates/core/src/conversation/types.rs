use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::agenda::AgendaItem;
use crate::meeting::{MeetingId, UserId};
use crate::serde::deserialize_timestamp;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    User,
    Assistant,
    #[serde(other)]
    Other,
}

/// A single message of the prep conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub message: String,
    pub author: Author,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<FixedOffset>,
}

impl ChatMessage {
    pub fn new(
        author: Author,
        message: impl Into<String>,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            message: message.into(),
            author,
            timestamp,
        }
    }
}

fn default_system_prompt() -> String {
    "EMPTY".to_string()
}

/// The prep conversation between a user and the assistant for one meeting.
///
/// `meeting_agenda` is ordered by position; its order is the agenda order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub user_id: UserId,
    pub meeting_id: MeetingId,
    #[serde(default)]
    pub chat_messages: Vec<ChatMessage>,
    #[serde(default)]
    pub meeting_agenda: Vec<AgendaItem>,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    #[serde(default)]
    pub finished: bool,
}

impl Conversation {
    /// Creates an empty conversation.
    pub fn new(meeting_id: MeetingId, user_id: UserId) -> Self {
        Self {
            user_id,
            meeting_id,
            chat_messages: Vec::new(),
            meeting_agenda: Vec::new(),
            system_prompt: default_system_prompt(),
            finished: false,
        }
    }

    /// Returns the chat messages ordered by timestamp.
    ///
    /// Messages with equal timestamps keep their stored order.
    pub fn messages_chronological(&self) -> Vec<&ChatMessage> {
        let mut messages: Vec<&ChatMessage> = self.chat_messages.iter().collect();
        messages.sort_by_key(|message| message.timestamp);
        messages
    }

    /// Returns the most recent assistant reply, if any.
    pub fn last_assistant_message(&self) -> Option<&ChatMessage> {
        self.messages_chronological()
            .into_iter()
            .rev()
            .find(|message| message.author == Author::Assistant)
    }
}
