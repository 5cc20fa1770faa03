//! HTTP client for the weather timeline API.

use crate::domain::{Coordinates, WeatherMetrics};
use crate::error::AppError;
use crate::timeline::response::TimelineResponse;

/// Comma-separated metric fields requested from the upstream API, in
/// the order the upstream documents them.
const TIMELINE_FIELDS: &str = "temperature,temperatureApparent,dewPoint,humidity,windSpeed,\
                               windDirection,windGust,pressureSurfaceLevel,\
                               precipitationProbability,cloudCover,visibility";

/// Client for the weather timeline API.
///
/// Holds a shared [`reqwest::Client`] plus the base URL and API key from
/// configuration. Cloning is cheap; the underlying connection pool is
/// reference-counted.
#[derive(Debug, Clone)]
pub struct TimelineClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TimelineClient {
    /// Creates a client for the given API base URL and key.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetches the current conditions for a coordinate pair.
    ///
    /// Issues one GET against the timeline endpoint requesting the fixed
    /// metric field list at `timesteps=1h` in metric units, and returns
    /// the first interval's values.
    ///
    /// # Errors
    ///
    /// - [`AppError::Transport`] when the request fails at the
    ///   connection level.
    /// - [`AppError::UpstreamStatus`] when the API answers non-200; the
    ///   raw body is carried in the error.
    /// - [`AppError::UpstreamSchema`] when a 200 body does not contain
    ///   the expected timeline structure.
    pub async fn fetch_current(&self, coords: &Coordinates) -> Result<WeatherMetrics, AppError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("location", coords.key()),
                ("fields", TIMELINE_FIELDS),
                ("timesteps", "1h"),
                ("units", "metric"),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "timeline API returned an error");
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TimelineResponse = response.json().await.map_err(|err| {
            tracing::warn!(error = %err, "timeline API body did not match the expected shape");
            AppError::UpstreamSchema
        })?;

        parsed.into_first_values().ok_or(AppError::UpstreamSchema)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn coords() -> Coordinates {
        let Ok(coords) = Coordinates::parse("40.7128,-74.0060") else {
            panic!("expected valid coordinates");
        };
        coords
    }

    fn timeline_body() -> serde_json::Value {
        serde_json::json!({
            "data": {
                "timelines": [{
                    "intervals": [{
                        "startTime": "2024-05-01T12:00:00Z",
                        "values": {
                            "temperature": 21.5,
                            "temperatureApparent": 22.0,
                            "dewPoint": 12.3,
                            "humidity": 55.0,
                            "windSpeed": 4.2,
                            "windDirection": 270.0,
                            "windGust": 7.8,
                            "pressureSurfaceLevel": 1013.25,
                            "precipitationProbability": 10.0,
                            "cloudCover": 40.0,
                            "visibility": 16.0,
                        }
                    }]
                }]
            }
        })
    }

    #[tokio::test]
    async fn returns_first_interval_values_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("location", "40.7128,-74.0060"))
            .and(query_param("timesteps", "1h"))
            .and(query_param("units", "metric"))
            .and(query_param("apikey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(timeline_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = TimelineClient::new(server.uri(), "test-key");
        let Ok(metrics) = client.fetch_current(&coords()).await else {
            panic!("expected a successful fetch");
        };
        assert_eq!(metrics.temperature, 21.5);
        assert_eq!(metrics.pressure_surface_level, 1013.25);
    }

    #[tokio::test]
    async fn non_200_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
            .mount(&server)
            .await;

        let client = TimelineClient::new(server.uri(), "bad-key");
        let Err(AppError::UpstreamStatus { status, body }) = client.fetch_current(&coords()).await
        else {
            panic!("expected an upstream status error");
        };
        assert_eq!(status, 401);
        assert_eq!(body, "invalid key");
    }

    #[tokio::test]
    async fn unexpected_body_shape_is_a_schema_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "weather": "nice" })),
            )
            .mount(&server)
            .await;

        let client = TimelineClient::new(server.uri(), "test-key");
        let Err(AppError::UpstreamSchema) = client.fetch_current(&coords()).await else {
            panic!("expected a schema error");
        };
    }

    #[tokio::test]
    async fn empty_intervals_are_a_schema_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "timelines": [{ "intervals": [] }] }
            })))
            .mount(&server)
            .await;

        let client = TimelineClient::new(server.uri(), "test-key");
        let Err(AppError::UpstreamSchema) = client.fetch_current(&coords()).await else {
            panic!("expected a schema error");
        };
    }

    #[tokio::test]
    async fn missing_metric_keys_are_a_schema_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "timelines": [{ "intervals": [{
                    "values": { "temperature": 21.5 }
                }] }] }
            })))
            .mount(&server)
            .await;

        let client = TimelineClient::new(server.uri(), "test-key");
        let Err(AppError::UpstreamSchema) = client.fetch_current(&coords()).await else {
            panic!("expected a schema error");
        };
    }
}
