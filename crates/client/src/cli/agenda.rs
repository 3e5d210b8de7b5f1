//! Agenda CLI commands.

use clap::{Parser, Subcommand};

/// Agenda management commands.
#[derive(Debug, Parser)]
pub struct AgendaCommand {
    #[command(subcommand)]
    pub action: AgendaAction,
}

/// Available agenda actions.
#[derive(Debug, Subcommand)]
pub enum AgendaAction {
    /// Show the agenda as meeting notes.
    Show {
        /// Meeting ID.
        meeting_id: i64,
        /// Only show items that are still open.
        #[arg(long)]
        hide_done: bool,
    },
    /// Move an agenda item and save the new order.
    Move {
        /// Meeting ID.
        meeting_id: i64,
        /// Current position (0-based).
        #[arg(long)]
        from: usize,
        /// New position (0-based).
        #[arg(long)]
        to: usize,
    },
    /// Check or uncheck an agenda item and save.
    Check {
        /// Meeting ID.
        meeting_id: i64,
        /// Item position (0-based).
        index: usize,
    },
}
