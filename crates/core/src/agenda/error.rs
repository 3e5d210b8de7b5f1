use thiserror::Error;

/// Errors raised when a reorder is requested with indices outside the list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReorderError {
    #[error("Source index {index} out of bounds for list of length {len}")]
    SourceOutOfBounds { index: usize, len: usize },
    #[error("Destination index {index} out of bounds for list of length {len}")]
    DestinationOutOfBounds { index: usize, len: usize },
}

/// Errors raised by meeting-notes operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotesError {
    #[error("Agenda item {index} does not exist (agenda has {len} items)")]
    NoSuchItem { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_error_display() {
        assert_eq!(
            ReorderError::SourceOutOfBounds { index: 4, len: 3 }.to_string(),
            "Source index 4 out of bounds for list of length 3"
        );
        assert_eq!(
            ReorderError::DestinationOutOfBounds { index: 9, len: 2 }.to_string(),
            "Destination index 9 out of bounds for list of length 2"
        );
    }

    #[test]
    fn test_notes_error_display() {
        assert_eq!(
            NotesError::NoSuchItem { index: 5, len: 2 }.to_string(),
            "Agenda item 5 does not exist (agenda has 2 items)"
        );
    }
}
