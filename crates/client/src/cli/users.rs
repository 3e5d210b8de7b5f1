//! User CLI commands.

use clap::{Parser, Subcommand};

/// Profile commands.
#[derive(Debug, Parser)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// Available user actions.
#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// List the profiles that can be passed to --user-id.
    List {
        /// Number of users to skip.
        #[arg(long, default_value = "0")]
        skip: u32,
        /// Maximum number of users to fetch.
        #[arg(long, default_value = "100")]
        limit: u32,
    },
}
