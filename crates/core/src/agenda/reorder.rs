use serde::{Deserialize, Serialize};

use super::error::ReorderError;

/// Outcome of a drag gesture over an ordered list.
///
/// `destination` is `None` when the item was dropped outside the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragResult {
    pub source: usize,
    pub destination: Option<usize>,
}

impl DragResult {
    pub fn new(source: usize, destination: Option<usize>) -> Self {
        Self {
            source,
            destination,
        }
    }
}

/// Returns a copy of `items` with the element at `from` moved to `to`.
///
/// Every other element keeps its relative order. Both indices must be
/// inside the list; they are never clamped.
pub fn reorder<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>, ReorderError> {
    let len = items.len();
    if from >= len {
        return Err(ReorderError::SourceOutOfBounds { index: from, len });
    }
    if to >= len {
        return Err(ReorderError::DestinationOutOfBounds { index: to, len });
    }

    let mut result = items.to_vec();
    let moved = result.remove(from);
    result.insert(to, moved);
    Ok(result)
}

/// Applies a drag gesture, returning `None` when the list is unchanged.
pub fn apply_drag<T: Clone>(
    items: &[T],
    drag: DragResult,
) -> Result<Option<Vec<T>>, ReorderError> {
    match drag.destination {
        Some(destination) => reorder(items, drag.source, destination).map(Some),
        None => Ok(None),
    }
}
