//! Waypoint chat client binary entry point.

use anyhow::Result;
use clap::Parser;
use waypoint_cli::{BackendClient, ChatRepl, config};

/// Terminal chat client for the waypoint backend.
#[derive(Parser, Debug)]
#[command(name = "waypoint-chat", version, about)]
struct Cli {
    /// Backend base URL (overrides BACKEND_URL).
    #[arg(long)]
    backend: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let base = cli.backend.unwrap_or_else(config::backend_url);

    let client = BackendClient::new(base);
    let mut repl = ChatRepl::new(client)?;
    repl.run().await
}
