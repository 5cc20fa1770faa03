//! HTTP layer: route handlers, HTML views, and router composition.
//!
//! All endpoints are mounted at the root level.

pub mod handlers;
pub mod views;

use axum::Router;

use crate::app_state::AppState;
use crate::persistence::WeatherStore;

/// Builds the complete router with all endpoints.
pub fn build_router<S: WeatherStore>() -> Router<AppState<S>> {
    handlers::routes()
}
