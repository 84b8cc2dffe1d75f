//! flock-cloud — Ministry management backend
//!
//! Long-running service that:
//! - Stores per-church intake form configurations and serves the
//!   resolved configuration to the public form renderer
//! - Tracks converts, members and follow-up check-ins per church
//! - Provides the platform admin API (account requests, churches,
//!   plan assignment)

mod api;
mod auth;
mod config;
mod db;
mod error;
mod state;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flock_cloud=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting flock-cloud (env: {})", config.environment);

    // Initialize application state (pool + migrations)
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("flock-cloud HTTP listening on {http_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
