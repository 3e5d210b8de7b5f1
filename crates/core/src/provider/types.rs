use serde::{Deserialize, Serialize};

/// Offset/limit window for listing meetings or users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub skip: u32,
    pub limit: u32,
}

impl Page {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }
}

impl Default for Page {
    /// The first hundred records, as the meetings drawer and profile picker load them.
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
        }
    }
}
