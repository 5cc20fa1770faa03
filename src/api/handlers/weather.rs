//! Weather endpoints: submission form, fetch-and-store, and view.

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use crate::api::views;
use crate::app_state::AppState;
use crate::domain::Coordinates;
use crate::error::AppError;
use crate::persistence::WeatherStore;

/// Form body for `POST /get_weather`.
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    /// Selected coordinate string, absent when nothing was submitted.
    #[serde(default)]
    pub city: Option<String>,
}

/// Query parameters for `GET /view_weather`.
#[derive(Debug, Deserialize)]
pub struct ViewParams {
    /// Coordinate string to look up.
    #[serde(default)]
    pub city: Option<String>,
}

/// `GET /` — Coordinate submission form.
pub async fn index_handler() -> Html<String> {
    Html(views::form_page())
}

/// `POST /get_weather` — Fetches current conditions for the submitted
/// coordinates, stores one snapshot, and redirects to the view page.
///
/// # Errors
///
/// Returns [`AppError::MissingCity`] when the form field is absent or
/// empty, [`AppError::InvalidCoordinates`] when it fails validation,
/// and the fetch or storage error otherwise.
pub async fn submit_handler<S: WeatherStore>(
    State(state): State<AppState<S>>,
    Form(form): Form<SubmitForm>,
) -> Result<Response, AppError> {
    let raw = form.city.unwrap_or_default();
    if raw.trim().is_empty() {
        return Err(AppError::MissingCity);
    }

    let coords = Coordinates::parse(&raw)?;
    let metrics = state.timeline.fetch_current(&coords).await?;
    let snapshot = state.store.insert(coords.key(), metrics).await?;
    tracing::info!(city = %coords, id = %snapshot.id, "stored weather snapshot");

    let location = format!("/view_weather?city={}", urlencoding::encode(coords.key()));
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// `GET /view_weather` — Renders the latest stored snapshot for the
/// requested coordinate string.
///
/// # Errors
///
/// Returns [`AppError::NoData`] when the `city` parameter is absent or
/// no snapshot was ever stored under it.
pub async fn view_handler<S: WeatherStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<ViewParams>,
) -> Result<Html<String>, AppError> {
    let city = params
        .city
        .filter(|city| !city.is_empty())
        .ok_or(AppError::NoData)?;

    let snapshot = state
        .store
        .find_latest(&city)
        .await?
        .ok_or(AppError::NoData)?;

    Ok(Html(views::weather_page(&snapshot)))
}

/// Weather routes mounted at the root level.
pub fn routes<S: WeatherStore>() -> Router<AppState<S>> {
    Router::new()
        .route("/", get(index_handler))
        .route("/get_weather", post(submit_handler::<S>))
        .route("/view_weather", get(view_handler::<S>))
}
