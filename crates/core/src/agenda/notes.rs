use super::error::NotesError;
use super::types::{AgendaItem, NoteState};

/// Returns a copy of `items` with the completion flag of one item flipped.
pub fn toggle(items: &[AgendaItem], index: usize) -> Result<Vec<AgendaItem>, NotesError> {
    if index >= items.len() {
        return Err(NotesError::NoSuchItem {
            index,
            len: items.len(),
        });
    }

    let mut result = items.to_vec();
    result[index].completed = !result[index].completed;
    Ok(result)
}

/// Returns the index of the first item that is not yet completed.
pub fn next_open(items: &[AgendaItem]) -> Option<usize> {
    items.iter().position(|item| !item.completed)
}

/// Classifies every item for display during the meeting.
pub fn note_states(items: &[AgendaItem]) -> Vec<NoteState> {
    let next = next_open(items);
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if item.completed {
                NoteState::Done
            } else if Some(index) == next {
                NoteState::Next
            } else {
                NoteState::Open
            }
        })
        .collect()
}

/// Returns the items to show, with their original indices.
///
/// With `hide_done` only open items are returned.
pub fn visible(items: &[AgendaItem], hide_done: bool) -> Vec<(usize, &AgendaItem)> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| !hide_done || !item.completed)
        .collect()
}
