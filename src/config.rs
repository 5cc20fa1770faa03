//! Application configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). The upstream API key and database
//! URL are required; everything else has a default.

use std::net::SocketAddr;

use anyhow::Context;

/// Default base URL of the weather timeline API.
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.tomorrow.io/v4/timelines";

/// Top-level application configuration.
///
/// Loaded once at startup via [`AppConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// API key for the weather timeline API.
    pub weather_api_key: String,

    /// Base URL of the weather timeline API.
    pub weather_api_url: String,

    /// PostgreSQL connection string.
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Minimum idle connections in the pool.
    pub database_min_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file,
    /// then falls back to defaults for everything except the required
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `WEATHER_API_KEY` or `DATABASE_URL` is unset,
    /// or if `LISTEN_ADDR` is set but cannot be parsed as a
    /// [`SocketAddr`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .context("LISTEN_ADDR is not a valid socket address")?;

        let weather_api_key =
            std::env::var("WEATHER_API_KEY").context("WEATHER_API_KEY must be set")?;

        let weather_api_url = std::env::var("WEATHER_API_URL")
            .unwrap_or_else(|_| DEFAULT_WEATHER_API_URL.to_string());

        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 10);
        let database_min_connections = parse_env("DATABASE_MIN_CONNECTIONS", 2);
        let database_connect_timeout_secs = parse_env("DATABASE_CONNECT_TIMEOUT_SECS", 5);

        Ok(Self {
            listen_addr,
            weather_api_key,
            weather_api_url,
            database_url,
            database_max_connections,
            database_min_connections,
            database_connect_timeout_secs,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
