//! Stored weather snapshot documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed set of metrics extracted from the upstream timeline API.
///
/// Field names on the wire are camelCase (the upstream JSON shape);
/// values are stored without unit conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherMetrics {
    /// Air temperature.
    pub temperature: f64,
    /// Apparent ("feels like") temperature.
    pub temperature_apparent: f64,
    /// Dew point.
    pub dew_point: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Wind speed.
    pub wind_speed: f64,
    /// Wind direction in degrees.
    pub wind_direction: f64,
    /// Wind gust speed.
    pub wind_gust: f64,
    /// Surface-level pressure.
    pub pressure_surface_level: f64,
    /// Precipitation probability in percent.
    pub precipitation_probability: f64,
    /// Cloud cover in percent.
    pub cloud_cover: f64,
    /// Visibility distance.
    pub visibility: f64,
}

/// One immutable stored snapshot: a coordinate key, the server-assigned
/// capture time, and the metrics fetched at that moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Unique identifier assigned at insert.
    pub id: Uuid,
    /// Canonical `"lat,lon"` coordinate key the snapshot was stored under.
    pub city: String,
    /// Server-side capture timestamp assigned at insert.
    pub recorded_at: DateTime<Utc>,
    /// Metrics fetched from the upstream API.
    pub metrics: WeatherMetrics,
}
