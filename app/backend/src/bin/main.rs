//! Waypoint backend binary entry point.
//!
//! Reads env configuration, constructs the Gemini provider and agent
//! runner, wires the application state, and runs the axum server with
//! graceful shutdown on ctrl-c.

use anyhow::Result;
use llm::{Client, GeminiProvider};
use runtime::{Agent, InMemorySessionService, Runner};
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use waypoint_backend::{AppState, BackendConfig, config, routes};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing from RUST_LOG (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Read configuration once at startup.
    let cfg = BackendConfig::from_env();

    // Construct the provider for the configured endpoint mode.
    let provider = if cfg.use_vertex {
        GeminiProvider::vertex(Client::new(), &cfg.api_key, &cfg.project, &cfg.region)?
    } else {
        GeminiProvider::api_key(Client::new(), &cfg.api_key)?
    };
    tracing::info!(
        model = config::AGENT_MODEL,
        region = %cfg.region,
        vertex = cfg.use_vertex,
        "provider initialized"
    );

    // Define the agent and build the runner.
    let agent = Agent::new(config::AGENT_NAME)
        .model(config::AGENT_MODEL)
        .instruction(config::AGENT_INSTRUCTION);
    let runner = Runner::new(
        config::APP_NAME,
        agent,
        Arc::new(InMemorySessionService::new()),
        provider,
    );

    // Build app state.
    let state = AppState {
        runner: Arc::new(runner),
    };

    // Bind and serve.
    let app = routes::router(state);
    let listener = tokio::net::TcpListener::bind(&cfg.bind).await?;
    tracing::info!("backend listening on {}", cfg.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("backend shut down");
    Ok(())
}

/// Wait for ctrl-c signal for graceful shutdown.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    tracing::info!("received shutdown signal");
}
