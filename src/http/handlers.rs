//! Cross-cutting HTTP endpoint handlers
//!
//! The webhook route collection itself lives in [`crate::http::webhooks`];
//! this module holds the shared application state and the endpoints that are
//! not part of a route collection (health, fallback).

use axum::{extract::State, http::StatusCode, http::Uri, response::IntoResponse, Json};
use std::{sync::Arc, time::SystemTime};

use crate::{config::SystemConfig, http::responses::*, state::WebhookStore};

/// Application state shared across handlers
///
/// Constructed once in the bootstrap and passed by reference; there is no
/// process-global state.
#[derive(Clone)]
pub struct AppState {
    pub config: SystemConfig,
    pub store: Arc<WebhookStore>,
    pub start_time: SystemTime,
}

impl AppState {
    pub fn new(config: SystemConfig, store: Arc<WebhookStore>) -> Self {
        Self {
            config,
            store,
            start_time: SystemTime::now(),
        }
    }
}

/// GET /health - Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "monitoring",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn handle_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let uptime = state.start_time.elapsed().unwrap_or_default().as_secs();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
    })
}

/// Fallback handler returning a structured 404
pub async fn handle_not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found(uri.path())),
    )
}
