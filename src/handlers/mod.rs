/// HTTP request handlers
use crate::domain::Health;
use crate::services::{build_rows, QuakeService};
use crate::templates;
use axum::{extract::State, response::Redirect, Json};
use chrono::Utc;
use maud::Markup;
use std::sync::Arc;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub quake_service: Arc<QuakeService>,
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// Render the event table from the current display state
pub async fn index(State(state): State<AppState>) -> Markup {
    let snapshot = state.quake_service.snapshot().await;
    let rows = build_rows(&snapshot.events, snapshot.filter_spain_mention);
    let start_year = state.quake_service.window().start_year();
    templates::quakes_page(&snapshot, &rows, start_year)
}

/// Run a fetch identical to the initial one, then show the result
pub async fn refresh(State(state): State<AppState>) -> Redirect {
    state.quake_service.refresh().await;
    Redirect::to("/")
}

/// Flip the Spain filter; only changes which fetched events are displayed
pub async fn toggle_filter(State(state): State<AppState>) -> Redirect {
    let filtering = state.quake_service.toggle_filter().await;
    info!("Spain filter toggled to {}", filtering);
    Redirect::to("/")
}
