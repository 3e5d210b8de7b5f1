//! Chat CLI commands.

use clap::{Parser, Subcommand};

/// Prep conversation commands.
#[derive(Debug, Parser)]
pub struct ChatCommand {
    #[command(subcommand)]
    pub action: ChatAction,
}

/// Available chat actions.
#[derive(Debug, Subcommand)]
pub enum ChatAction {
    /// Show the conversation for a meeting.
    Show {
        /// Meeting ID.
        meeting_id: i64,
    },
    /// Send a message to the assistant.
    Send {
        /// Meeting ID.
        meeting_id: i64,
        /// Message text.
        message: String,
    },
}
