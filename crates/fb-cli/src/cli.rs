use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "fb")]
#[command(about = "Feedback board Kanban client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// API root URL (defaults to api.base_url from .fb/config.toml)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Access token sent as a bearer token (overrides session.access_token)
    #[arg(long, global = true)]
    pub(crate) token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
