mod error;
mod inmemory;
mod traits;
mod types;

pub use error::{ProviderError, Result};
pub use inmemory::InMemoryBackend;
pub use traits::{AgendaStore, ConversationProvider, MeetingProvider, UserProvider};
pub use types::Page;
