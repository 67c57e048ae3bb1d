/// Main application entry point
mod clients;
mod config;
mod domain;
mod errors;
mod handlers;
mod routes;
mod services;
mod templates;
mod utils;

use crate::clients::UsgsClient;
use crate::config::AppConfig;
use crate::domain::QueryWindow;
use crate::handlers::AppState;
use crate::routes::build_router;
use crate::services::QuakeService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    // Initialize client
    let client = UsgsClient::new(config.feed_url.clone(), config.http_timeout_seconds)?;

    // Initialize service with the startup query window
    let window = QueryWindow::current();
    info!(
        "Query window: {} to {}",
        window.start_date, window.end_date
    );
    let quake_service = Arc::new(QuakeService::new(client, window));

    // Initialize application state
    let state = AppState {
        quake_service: quake_service.clone(),
    };

    // Kick off the initial fetch; the page shows the loading state until it lands
    {
        let service = quake_service.clone();
        tokio::spawn(async move {
            info!("Starting initial feed fetch");
            service.refresh().await;
        });
    }

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("quake_watch service listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
