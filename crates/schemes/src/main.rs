mod app;
mod config;
mod handlers;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use schemes_core::storage::SchemeRepository;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState};

/// Schemes - Store schemes and their ordered steps
#[derive(Parser, Debug)]
#[command(name = "schemes")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Path to the SQLite database file (overrides SQLITE_PATH)
    #[arg(long)]
    database: Option<String>,

    /// Load the demo schemes into an empty store
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schemes=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(database) = cli.database {
        config.sqlite_path = database;
    }
    config.seed_demo_data |= cli.seed;

    let scheme_repo = init_repository(&config).await?;
    let state = AppState::new(scheme_repo);

    let app = create_app(state, config.request_timeout());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Open the SQLite store and optionally seed it.
#[cfg(feature = "sqlite")]
async fn init_repository(config: &Config) -> Result<Arc<dyn SchemeRepository>> {
    let repo = storage::SqliteRepository::new(&config.sqlite_path).await?;

    tracing::info!(path = %config.sqlite_path, "Using SQLite storage");

    if config.seed_demo_data {
        storage::seed_demo_data(&repo).await?;
    }

    Ok(Arc::new(repo))
}

/// Create the in-memory store and optionally seed it.
#[cfg(not(feature = "sqlite"))]
async fn init_repository(config: &Config) -> Result<Arc<dyn SchemeRepository>> {
    let repo = storage::InMemoryRepository::new();

    tracing::info!("Using in-memory storage");

    if config.seed_demo_data {
        storage::seed_demo_data(&repo).await?;
    }

    Ok(Arc::new(repo))
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
