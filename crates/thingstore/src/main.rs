mod app;
mod config;
mod context;
mod handlers;
mod state;
mod storage;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human readable lines
    Pretty,
    /// One JSON object per line
    Json,
}

/// Thingstore - CRUD service for Things backed by DynamoDB
#[derive(Parser, Debug)]
#[command(name = "thingstore")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, env = "LOG_FORMAT")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_format);

    let config = Config::from_env();
    tracing::info!(
        table = %config.table_name,
        region = %config.region,
        endpoint = ?config.endpoint_url,
        "Loaded configuration"
    );
    if config.table_name.is_empty() {
        tracing::warn!("DDB_TABLE_NAME is not set; storage calls will fail");
    }

    let state = build_state(&config).await;
    let app = create_app(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "thingstore=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init(),
    }
}

/// Build the application state with the DynamoDB repository.
#[cfg(feature = "dynamodb")]
async fn build_state(config: &Config) -> AppState {
    use std::sync::Arc;

    use crate::storage::DynamoDbRepository;

    let repo = DynamoDbRepository::from_config(config).await;
    tracing::info!(table = %repo.table_name(), "Using DynamoDB storage");

    AppState::new(Arc::new(repo))
}

/// Build the application state with the in-memory repository.
#[cfg(not(feature = "dynamodb"))]
async fn build_state(_config: &Config) -> AppState {
    tracing::warn!("Using in-memory storage; data is lost on shutdown");
    AppState::default()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "thingstore",
            "-H",
            "127.0.0.1",
            "--port",
            "8080",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.log_format, LogFormat::Json);
    }
}
