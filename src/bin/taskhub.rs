//! Runs the taskhub HTTP server.
//!
//! Usage:
//!
//! ```text
//! taskhub [--bind 127.0.0.1:8080] [--database-url postgres://...] \
//!         [--api-tokens token-a,token-b] [--config path/to/config.toml]
//! ```
//!
//! Without a database URL the server keeps tasks in memory, which suits
//! local experiments and demos. With one, the `tasks` table is created on
//! startup when missing.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use mockable::DefaultClock;
use taskhub::config::{AppConfig, CliArgs, DEFAULT_LOG_LEVEL};
use taskhub::shutdown::shutdown_signal;
use taskhub::task::{
    adapters::{
        memory::InMemoryTaskRepository,
        postgres::PostgresTaskRepository,
        web::{self, BearerAuth},
    },
    ports::TaskRepositoryError,
    services::TaskServices,
};
use thiserror::Error;
use tokio::net::TcpListener;

/// Fatal startup and serving failures.
#[derive(Debug, Error)]
enum ServerError {
    #[error("task store unavailable: {0}")]
    Repository(#[from] TaskRepositoryError),
    #[error("server I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliArgs::parse();
    let loaded = AppConfig::load(&cli);

    let log_level = loaded
        .as_ref()
        .map_or(DEFAULT_LOG_LEVEL, |config| config.log_level.as_str());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid taskhub configuration");
            return ExitCode::FAILURE;
        }
    };

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "taskhub server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &AppConfig) -> Result<(), ServerError> {
    let auth = bearer_auth(config);
    let clock = Arc::new(DefaultClock);

    let app = if let Some(database_url) = config.database_url.as_deref() {
        let repository = PostgresTaskRepository::connect(database_url, config.pool_max_size)?;
        repository.ensure_schema().await?;
        tracing::info!(pool_max_size = config.pool_max_size, "using PostgreSQL task store");
        web::router(TaskServices::new(Arc::new(repository), clock), auth)
    } else {
        tracing::info!("using in-memory task store");
        web::router(
            TaskServices::new(Arc::new(InMemoryTaskRepository::new()), clock),
            auth,
        )
    };

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "taskhub listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("taskhub stopped");
    Ok(())
}

fn bearer_auth(config: &AppConfig) -> BearerAuth {
    if config.auth_disabled {
        tracing::warn!("bearer-token checks disabled; the task API is open to anyone");
        return BearerAuth::disabled();
    }
    if config.api_tokens.is_empty() {
        tracing::warn!("no API tokens configured; every task request will be rejected");
    }
    BearerAuth::new(config.api_tokens.iter().cloned())
}
