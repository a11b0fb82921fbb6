// HTTP request handlers
use crate::domain::tooltip::{PointerEvent, Tooltip};
use crate::infrastructure::svg_document;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct TooltipQuery {
    /// Index of the hovered marker in render order
    pub marker: usize,
    /// Pointer page coordinates
    pub x: f64,
    pub y: f64,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Serve the chart page: container, rendered SVG, hidden tooltip panel
pub async fn chart_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.chart_service.build_chart().await {
        Ok(chart) => {
            Html(svg_document::render_page(&svg_document::render_svg(&chart))).into_response()
        }
        Err(e) => {
            tracing::error!("failed to render the scatterplot: {:#}", e);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

/// Serve the bare SVG document
pub async fn chart_svg(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.chart_service.build_chart().await {
        Ok(chart) => (
            [(header::CONTENT_TYPE, "image/svg+xml")],
            svg_document::render_svg(&chart),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to render the scatterplot: {:#}", e);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

/// Pointer-enter over a marker: place and fill the tooltip panel
pub async fn marker_tooltip(
    Query(query): Query<TooltipQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let pointer = PointerEvent::new(query.x, query.y);
    match state.chart_service.marker_tooltip(query.marker, pointer).await {
        Ok(Some(tooltip)) => Html(svg_document::render_tooltip(&tooltip)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!("failed to resolve tooltip for marker {}: {:#}", query.marker, e);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

/// Pointer-leave: the panel goes back to hidden
pub async fn hide_tooltip() -> Html<String> {
    Html(svg_document::render_tooltip(&Tooltip::default().pointer_leave()))
}
