//! fb - Feedback board Kanban client
//!
//! Loads the Kanban board from the feedback backend, moves cards between
//! status columns, and toggles upvotes.
//!
//! # Examples
//!
//! ```bash
//! # Render the board
//! fb kanban show
//!
//! # Drag feedback 42 onto the "In Progress" column
//! fb kanban move 42 in_progress --token <access-token>
//!
//! # Print one item
//! fb feedback get 42 --pretty
//! ```

mod cli;
mod commands;
mod feedback_commands;
mod kanban_commands;

use crate::{
    cli::Cli, commands::Commands, feedback_commands::FeedbackCommands,
    kanban_commands::KanbanCommands,
};

use fb_cli::{CliResult, Client, Session, logger};
use fb_config::Config;
use fb_core::FeedbackId;
use fb_kanban::{BoardRenderer, KanbanSession, TransferOutcome, UpvoteState};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<ExitCode> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    // Explicit flag > config file / env
    let base_url = cli.server.unwrap_or_else(|| config.api.base_url.clone());
    let session = match cli.token {
        Some(token) => Some(Session::new(token)),
        None => Session::from_config(&config.session),
    };
    let client = Client::with_timeout(&base_url, session, config.api.timeout())?;

    match cli.command {
        Commands::Kanban { action } => match action {
            KanbanCommands::Show => show_board(client).await,
            KanbanCommands::Move { id, status } => move_item(client, id, &status).await,
        },

        Commands::Feedback { action } => match action {
            FeedbackCommands::Get { id } => {
                let item = client.get_feedback(id).await?;
                print_json(&item, cli.pretty)
            }
            FeedbackCommands::Upvote { id } => {
                #[derive(Serialize)]
                struct UpvoteOutput {
                    id: FeedbackId,
                    status: UpvoteState,
                }

                let status = client.toggle_upvote(id).await?;
                print_json(&UpvoteOutput { id, status }, cli.pretty)
            }
        },
    }
}

async fn show_board(client: Client) -> CliResult<ExitCode> {
    let mut session = KanbanSession::new(client);
    let mut renderer = BoardRenderer::new();

    let loaded = session.load().await.is_ok();
    let view = renderer.render_state(session.load_state(), None);

    if loaded {
        print!("{}", view);
        Ok(ExitCode::SUCCESS)
    } else {
        eprint!("{}", view);
        Ok(ExitCode::FAILURE)
    }
}

async fn move_item(client: Client, id: FeedbackId, key: &str) -> CliResult<ExitCode> {
    let mut session = KanbanSession::new(client);
    let mut renderer = BoardRenderer::new();

    session.load().await?;
    session.drag_start(id);
    session.drag_over(key);

    let outcome = session.drop_item(id, key).await;
    let view = renderer.render_state(session.load_state(), None);

    match outcome {
        TransferOutcome::Ignored => {
            eprintln!("Feedback {} not moved: nothing to do for '{}'", id, key);
            print!("{}", view);
            Ok(ExitCode::SUCCESS)
        }
        TransferOutcome::Confirmed(item) => {
            eprintln!("Feedback {} moved to {}", item.id, item.status.label());
            print!("{}", view);
            Ok(ExitCode::SUCCESS)
        }
        TransferOutcome::Resynced { error } => {
            eprintln!("Error: could not move feedback {}: {}", id, error);
            eprintln!("Board reloaded from server.");
            print!("{}", view);
            Ok(ExitCode::FAILURE)
        }
        TransferOutcome::ResyncFailed {
            error,
            reload_error,
        } => {
            eprintln!("Error: could not move feedback {}: {}", id, error);
            eprintln!("Error: reloading the board also failed: {}", reload_error);
            eprint!("{}", view);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<ExitCode> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    println!("{}", json);
    Ok(ExitCode::SUCCESS)
}
