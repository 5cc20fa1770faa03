//! Shared application state injected into all Axum handlers.

use crate::persistence::WeatherStore;
use crate::timeline::TimelineClient;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// Generic over the store so tests can substitute an in-memory
/// implementation for the PostgreSQL one.
#[derive(Debug, Clone)]
pub struct AppState<S: WeatherStore> {
    /// Client for the weather timeline API.
    pub timeline: TimelineClient,
    /// Snapshot storage handle.
    pub store: S,
}
