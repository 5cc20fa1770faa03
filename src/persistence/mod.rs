//! Persistence layer: append-only weather snapshot storage.
//!
//! Provides the [`WeatherStore`] trait for durable snapshot storage
//! with latest-by-timestamp lookup. The concrete implementation uses
//! `sqlx::PgPool` for async PostgreSQL access; tests substitute an
//! in-memory store.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use std::future::Future;

use crate::domain::{WeatherMetrics, WeatherSnapshot};
use crate::error::AppError;

pub use postgres::PostgresStore;

/// Append-only snapshot storage keyed by the canonical coordinate
/// string.
///
/// Implementations are cheaply cloneable handles; handlers receive one
/// through the shared application state.
pub trait WeatherStore: Clone + Send + Sync + 'static {
    /// Appends one snapshot for `city`, assigning the identifier and
    /// capture timestamp server-side, and returns the stored document.
    fn insert(
        &self,
        city: &str,
        metrics: WeatherMetrics,
    ) -> impl Future<Output = Result<WeatherSnapshot, AppError>> + Send;

    /// Returns the snapshot with the maximum `recorded_at` for the
    /// exact `city` string, or `None` when nothing was ever stored
    /// under it.
    fn find_latest(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<Option<WeatherSnapshot>, AppError>> + Send;
}
