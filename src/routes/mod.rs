/// Application routes configuration
use crate::handlers::{health, index, refresh, toggle_filter, AppState};
use axum::{
    routing::{get, post},
    Router,
};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Event table
        .route("/", get(index))
        // Controls
        .route("/refresh", post(refresh))
        .route("/filter", post(toggle_filter))
        .with_state(state)
}
