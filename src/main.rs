// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::application::chart_service::ChartService;
use crate::infrastructure::config::load_dataset_config;
use crate::infrastructure::http_dataset::HttpDatasetRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    chart_page, chart_svg, health_check, hide_tooltip, marker_tooltip,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let dataset_config = load_dataset_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpDatasetRepository::new(dataset_config.dataset.url));

    // Create service (application layer)
    let chart_service = ChartService::new(repository);

    // Create application state
    let state = Arc::new(AppState { chart_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(chart_page))
        .route("/chart.svg", get(chart_svg))
        .route("/tooltip", get(marker_tooltip))
        .route("/tooltip/hide", get(hide_tooltip))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
    println!("Starting cyclist-scatter service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
