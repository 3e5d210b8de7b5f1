//! CLI command definitions.

pub mod agenda;
pub mod chat;
pub mod meetings;
pub mod users;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, DEFAULT_USER_ID};

/// Meeting prep assistant: browse meetings, chat, and manage agendas.
#[derive(Debug, Parser)]
#[command(name = "meetprep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL.
    #[arg(long, env = "MEETPREP_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Profile to act as.
    #[arg(long, short, env = "MEETPREP_USER_ID", default_value_t = DEFAULT_USER_ID)]
    pub user_id: i64,

    /// Request timeout in milliseconds.
    #[arg(long, env = "MEETPREP_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List user profiles.
    Users(users::UsersCommand),
    /// Browse scheduled meetings.
    Meetings(meetings::MeetingsCommand),
    /// Chat with the prep assistant.
    Chat(chat::ChatCommand),
    /// Show, reorder, and check off agenda items.
    Agenda(agenda::AgendaCommand),
}
