//! climatrack server entry point.
//!
//! Starts the Axum HTTP server serving the submission form, the
//! fetch-and-store endpoint, and the weather view.

use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use climatrack::api;
use climatrack::app_state::AppState;
use climatrack::config::AppConfig;
use climatrack::persistence::PostgresStore;
use climatrack::timeline::TimelineClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting climatrack");

    // Connect to PostgreSQL and apply migrations
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await
        .context("failed to connect to PostgreSQL")?;
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("failed to run database migrations")?;

    // Build application state
    let app_state = AppState {
        timeline: TimelineClient::new(config.weather_api_url, config.weather_api_key),
        store: PostgresStore::new(pool),
    };

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .context("failed to bind listen address")?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
