//! In-memory snapshot store used as a test double.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::WeatherStore;
use crate::domain::{WeatherMetrics, WeatherSnapshot};
use crate::error::AppError;

/// Vec-backed [`WeatherStore`] with the same append-only semantics as
/// the PostgreSQL implementation.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshots: Arc<Mutex<Vec<WeatherSnapshot>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshots stored so far.
    pub async fn len(&self) -> usize {
        self.snapshots.lock().await.len()
    }

    /// Whether the store holds no snapshots.
    pub async fn is_empty(&self) -> bool {
        self.snapshots.lock().await.is_empty()
    }
}

impl WeatherStore for MemoryStore {
    async fn insert(
        &self,
        city: &str,
        metrics: WeatherMetrics,
    ) -> Result<WeatherSnapshot, AppError> {
        let snapshot = WeatherSnapshot {
            id: Uuid::new_v4(),
            city: city.to_string(),
            recorded_at: Utc::now(),
            metrics,
        };
        self.snapshots.lock().await.push(snapshot.clone());
        Ok(snapshot)
    }

    async fn find_latest(&self, city: &str) -> Result<Option<WeatherSnapshot>, AppError> {
        let snapshots = self.snapshots.lock().await;
        Ok(snapshots
            .iter()
            .filter(|s| s.city == city)
            .max_by_key(|s| s.recorded_at)
            .cloned())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn metrics(temperature: f64) -> WeatherMetrics {
        WeatherMetrics {
            temperature,
            temperature_apparent: temperature,
            dew_point: 10.0,
            humidity: 50.0,
            wind_speed: 3.0,
            wind_direction: 180.0,
            wind_gust: 5.0,
            pressure_surface_level: 1010.0,
            precipitation_probability: 0.0,
            cloud_cover: 20.0,
            visibility: 16.0,
        }
    }

    #[tokio::test]
    async fn find_latest_returns_none_for_unknown_city() {
        let store = MemoryStore::new();
        let Ok(found) = store.find_latest("40.7,-74.0").await else {
            panic!("expected lookup to succeed");
        };
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn insert_then_find_latest_round_trips() {
        let store = MemoryStore::new();
        let Ok(stored) = store.insert("40.7,-74.0", metrics(21.0)).await else {
            panic!("expected insert to succeed");
        };
        let Ok(Some(found)) = store.find_latest("40.7,-74.0").await else {
            panic!("expected a stored snapshot");
        };
        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn repeated_inserts_accumulate_and_latest_wins() {
        let store = MemoryStore::new();
        let Ok(_) = store.insert("40.7,-74.0", metrics(18.0)).await else {
            panic!("expected insert to succeed");
        };
        let Ok(second) = store.insert("40.7,-74.0", metrics(24.0)).await else {
            panic!("expected insert to succeed");
        };
        assert_eq!(store.len().await, 2);

        let Ok(Some(found)) = store.find_latest("40.7,-74.0").await else {
            panic!("expected a stored snapshot");
        };
        assert_eq!(found.id, second.id);
        assert_eq!(found.metrics.temperature, 24.0);
    }

    #[tokio::test]
    async fn lookup_matches_the_exact_city_string() {
        let store = MemoryStore::new();
        let Ok(_) = store.insert("40.7,-74.0", metrics(21.0)).await else {
            panic!("expected insert to succeed");
        };
        let Ok(found) = store.find_latest("40.70,-74.00").await else {
            panic!("expected lookup to succeed");
        };
        assert!(found.is_none());
    }
}
