//! Webhook route collection
//!
//! Registered on the main router as a unit. Handlers declare their request
//! and response schemas, so mounting the collection also contributes its
//! operations to the generated OpenAPI document.

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::http::handlers::AppState;
use crate::http::responses::ListWebhooksResponse;

/// Route collection for webhook inspection
pub fn router() -> OpenApiRouter<Arc<AppState>> {
    OpenApiRouter::new().routes(routes!(list_webhooks))
}

/// GET /webhooks - List captured webhooks
#[utoipa::path(
    get,
    path = "/webhooks",
    tag = "webhooks",
    responses(
        (status = 200, description = "Captured webhooks in arrival order", body = ListWebhooksResponse)
    )
)]
pub async fn list_webhooks(State(state): State<Arc<AppState>>) -> Json<ListWebhooksResponse> {
    let webhooks = state.store.list();
    let count = webhooks.len();

    debug!(count, "Listing captured webhooks");

    Json(ListWebhooksResponse { webhooks, count })
}
