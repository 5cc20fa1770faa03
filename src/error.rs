//! Application error types with HTTP status code mapping.
//!
//! [`AppError`] is the central error type. Each variant maps to an HTTP
//! status code and a plain-text response body rendered at the router
//! boundary. Nothing is retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Server-side error enum covering the full failure taxonomy.
///
/// | Variant | HTTP Status |
/// |---|---|
/// | `MissingCity`, `InvalidCoordinates` | 400 Bad Request |
/// | `NoData` | 404 Not Found |
/// | `UpstreamSchema`, `UpstreamStatus`, `Storage`, `Transport` | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Submission arrived without a coordinate string.
    #[error("Please select a city")]
    MissingCity,

    /// Coordinate string failed validation.
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// The upstream API answered 200 but the body did not match the
    /// expected timeline structure.
    #[error("API response structure has changed. Required keys not found.")]
    UpstreamSchema,

    /// The upstream API answered with a non-200 status.
    #[error("Failed to get weather data: {status} - {body}")]
    UpstreamStatus {
        /// HTTP status code returned by the upstream API.
        status: u16,
        /// Raw response body as received.
        body: String,
    },

    /// No stored snapshot matches the requested coordinate string.
    #[error("No weather data available")]
    NoData,

    /// Persistence layer failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// The outbound request to the upstream API failed at the transport
    /// level (connection refused, DNS, etc.).
    #[error("weather request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl AppError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCity | Self::InvalidCoordinates(_) => StatusCode::BAD_REQUEST,
            Self::NoData => StatusCode::NOT_FOUND,
            Self::UpstreamSchema
            | Self::UpstreamStatus { .. }
            | Self::Storage(_)
            | Self::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}
