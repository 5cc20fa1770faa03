//! PostgreSQL implementation of the snapshot store.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::WeatherStore;
use crate::domain::{WeatherMetrics, WeatherSnapshot};
use crate::error::AppError;

/// Discriminator value tagging every row written by this store.
const WEATHER_DOC_TYPE: &str = "weather";

/// PostgreSQL-backed snapshot store using `sqlx::PgPool`.
///
/// Metrics are stored as a JSONB payload; the schema lives under
/// `migrations/`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl WeatherStore for PostgresStore {
    async fn insert(
        &self,
        city: &str,
        metrics: WeatherMetrics,
    ) -> Result<WeatherSnapshot, AppError> {
        let id = Uuid::new_v4();
        let recorded_at = Utc::now();
        let metrics_json =
            serde_json::to_value(&metrics).map_err(|e| AppError::Storage(e.to_string()))?;

        sqlx::query(
            "INSERT INTO weather_snapshots (id, doc_type, city, metrics, recorded_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(WEATHER_DOC_TYPE)
        .bind(city)
        .bind(&metrics_json)
        .bind(recorded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(WeatherSnapshot {
            id,
            city: city.to_string(),
            recorded_at,
            metrics,
        })
    }

    async fn find_latest(&self, city: &str) -> Result<Option<WeatherSnapshot>, AppError> {
        let row = sqlx::query_as::<_, (Uuid, String, serde_json::Value, DateTime<Utc>)>(
            "SELECT id, city, metrics, recorded_at FROM weather_snapshots \
             WHERE doc_type = $1 AND city = $2 ORDER BY recorded_at DESC LIMIT 1",
        )
        .bind(WEATHER_DOC_TYPE)
        .bind(city)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

        match row {
            Some((id, city, metrics_json, recorded_at)) => {
                let metrics = serde_json::from_value(metrics_json)
                    .map_err(|e| AppError::Storage(e.to_string()))?;
                Ok(Some(WeatherSnapshot {
                    id,
                    city,
                    recorded_at,
                    metrics,
                }))
            }
            None => Ok(None),
        }
    }
}
