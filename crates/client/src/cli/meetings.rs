//! Meeting CLI commands.

use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use meetprep_core::serde::parse_timestamp;

/// Meeting browsing commands.
#[derive(Debug, Parser)]
pub struct MeetingsCommand {
    #[command(subcommand)]
    pub action: MeetingsAction,
}

/// Available meeting actions.
#[derive(Debug, Subcommand)]
pub enum MeetingsAction {
    /// List meetings grouped by calendar week and day.
    List {
        /// Number of meetings to skip.
        #[arg(long, default_value = "0")]
        skip: u32,
        /// Maximum number of meetings to fetch.
        #[arg(long, default_value = "100")]
        limit: u32,
    },
    /// Show a meeting and its participants.
    Get {
        /// Meeting ID.
        id: i64,
    },
    /// Schedule a new meeting.
    Create {
        /// Meeting title.
        #[arg(long)]
        title: String,
        /// Start time, RFC 3339 or naive UTC (defaults to the next full hour).
        #[arg(long, value_parser = parse_date)]
        date: Option<DateTime<FixedOffset>>,
        /// Meeting description.
        #[arg(long)]
        description: Option<String>,
        /// Meeting category, e.g. "planning".
        #[arg(long)]
        meeting_type: Option<String>,
    },
}

fn parse_date(s: &str) -> Result<DateTime<FixedOffset>, String> {
    parse_timestamp(s)
        .ok_or_else(|| format!("invalid date {s:?}, expected e.g. 2024-06-03T10:00:00Z"))
}
