//! meetprep CLI entry point.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use meetprep_client::cli::agenda::AgendaAction;
use meetprep_client::cli::chat::ChatAction;
use meetprep_client::cli::meetings::MeetingsAction;
use meetprep_client::cli::users::UsersAction;
use meetprep_client::cli::{Cli, Commands, OutputFormat};
use meetprep_client::output::{format_json, pretty};
use meetprep_client::{ClientConfig, MeetprepClient};
use meetprep_core::agenda::AgendaItem;
use meetprep_core::meeting::{next_full_hour, MeetingId, NewMeeting};
use meetprep_core::provider::Page;
use meetprep_core::session::PrepSession;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meetprep_client=info,meetprep_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::new(&cli.base_url, cli.user_id, cli.timeout_ms)?;
    tracing::debug!(base_url = %config.base_url, user_id = %config.user_id, "Loaded config");

    let client = Arc::new(MeetprepClient::new(&config)?);
    let mut session = PrepSession::new(client.clone(), config.user_id);

    match cli.command {
        Commands::Users(users_cmd) => match users_cmd.action {
            UsersAction::List { skip, limit } => {
                let users = session.users(Page::new(skip, limit)).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_json(&users)?),
                    OutputFormat::Pretty => {
                        println!("{}", pretty::format_users(&users, session.user_id()))
                    }
                }
            }
        },
        Commands::Meetings(meetings_cmd) => match meetings_cmd.action {
            MeetingsAction::List { skip, limit } => {
                let buckets = session
                    .meetings_by_week(Page::new(skip, limit))
                    .await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_json(&buckets)?),
                    OutputFormat::Pretty => println!("{}", pretty::format_week_buckets(&buckets)),
                }
            }
            MeetingsAction::Get { id } => {
                let details = client.fetch_meeting(MeetingId(id)).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_json(&details)?),
                    OutputFormat::Pretty => {
                        println!("{}", pretty::format_meeting_details(&details))
                    }
                }
            }
            MeetingsAction::Create {
                title,
                date,
                description,
                meeting_type,
            } => {
                let date = date.unwrap_or_else(|| next_full_hour(meetprep_core::serde::now()));
                let mut new = NewMeeting::new(title, date);
                new.description = description;
                new.meeting_type = meeting_type.unwrap_or_default();

                let created = client.post_meeting(&new).await?;
                tracing::info!(meeting_id = %created.id, "Scheduled meeting");
                match cli.format {
                    OutputFormat::Json => println!("{}", format_json(&created)?),
                    OutputFormat::Pretty => println!("{}", pretty::format_meeting_line(&created)),
                }
            }
        },
        Commands::Chat(chat_cmd) => {
            let (meeting_id, conversation) = match chat_cmd.action {
                ChatAction::Show { meeting_id } => {
                    let meeting_id = MeetingId(meeting_id);
                    (
                        meeting_id,
                        client
                            .fetch_conversation(meeting_id, session.user_id())
                            .await?,
                    )
                }
                ChatAction::Send {
                    meeting_id,
                    message,
                } => {
                    let meeting_id = MeetingId(meeting_id);
                    let user_id = session.user_id();
                    // The backend only accepts messages on a started conversation.
                    client.fetch_conversation(meeting_id, user_id).await?;
                    (
                        meeting_id,
                        client.post_message(meeting_id, user_id, &message).await?,
                    )
                }
            };
            tracing::debug!(
                %meeting_id,
                messages = conversation.chat_messages.len(),
                "Conversation loaded"
            );
            match cli.format {
                OutputFormat::Json => println!("{}", format_json(&conversation)?),
                OutputFormat::Pretty => println!("{}", pretty::format_conversation(&conversation)),
            }
        }
        Commands::Agenda(agenda_cmd) => match agenda_cmd.action {
            AgendaAction::Show {
                meeting_id,
                hide_done,
            } => {
                let items = session.open_meeting(MeetingId(meeting_id)).await?;
                print_agenda(items, hide_done, cli.format)?;
            }
            AgendaAction::Move {
                meeting_id,
                from,
                to,
            } => {
                session.open_meeting(MeetingId(meeting_id)).await?;
                session.move_item(from, to)?;
                save_and_print(&mut session, cli.format, cli.quiet).await?;
            }
            AgendaAction::Check { meeting_id, index } => {
                session.open_meeting(MeetingId(meeting_id)).await?;
                session.toggle_item(index)?;
                save_and_print(&mut session, cli.format, cli.quiet).await?;
            }
        },
    }

    Ok(())
}

async fn save_and_print(
    session: &mut PrepSession<MeetprepClient>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    if session.has_unsaved_changes() {
        session.save().await?;
    } else {
        tracing::info!("Agenda unchanged, nothing to save");
    }

    if !quiet {
        if let Some(items) = session.agenda() {
            print_agenda(items, false, format)?;
        }
    }
    Ok(())
}

fn print_agenda(items: &[AgendaItem], hide_done: bool, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", format_json(&items)?),
        OutputFormat::Pretty => println!("{}", pretty::format_agenda(items, hide_done)),
    }
    Ok(())
}
