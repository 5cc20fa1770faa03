//! Endpoint handlers organized by resource.

pub mod system;
pub mod weather;

use axum::Router;

use crate::app_state::AppState;
use crate::persistence::WeatherStore;

/// Composes all resource routes.
pub fn routes<S: WeatherStore>() -> Router<AppState<S>> {
    Router::new()
        .merge(weather::routes())
        .merge(system::routes())
}
