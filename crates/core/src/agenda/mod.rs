mod error;
mod notes;
mod reorder;
mod types;

pub use error::{NotesError, ReorderError};
pub use notes::{next_open, note_states, toggle, visible};
pub use reorder::{apply_drag, reorder, DragResult};
pub use types::{AgendaItem, NoteState};
