use serde::{Deserialize, Serialize};

/// A single discussion point of a meeting agenda.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgendaItem {
    pub agenda_item: String,
    #[serde(default)]
    pub completed: bool,
}

impl AgendaItem {
    /// Creates an open agenda item.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            agenda_item: text.into(),
            completed: false,
        }
    }

    /// Marks the item as completed.
    pub fn done(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// Display state of an agenda item while taking meeting notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteState {
    /// The first open item; the one being discussed.
    Next,
    Open,
    Done,
}

impl NoteState {
    pub fn is_done(&self) -> bool {
        matches!(self, NoteState::Done)
    }
}
