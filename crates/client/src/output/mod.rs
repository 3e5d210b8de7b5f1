//! Output formatting functions.

pub mod pretty;

use crate::error::Result;

/// Format a value as compact JSON, one document per line.
pub fn format_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
