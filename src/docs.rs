//! OpenAPI document metadata
//!
//! The operations and schemas come from the mounted route collections; this
//! module supplies the static document metadata and the pretty-printed
//! rendering used by the `openapi` subcommand.

use utoipa::OpenApi;

use crate::config::DocsConfig;
use crate::types::{Error, Result};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Webhook Inspector API",
        description = "API for capturing and inspecting webhooks in Webhook requests",
        version = "1.0.0"
    ),
    tags(
        (name = "webhooks", description = "Captured webhook inspection"),
        (name = "monitoring", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Base document with metadata applied from configuration
pub fn base_openapi(docs: &DocsConfig) -> utoipa::openapi::OpenApi {
    let mut api = ApiDoc::openapi();
    api.info.title = docs.title.clone();
    api.info.description = Some(docs.description.clone());
    api.info.version = docs.version.clone();
    api
}

/// Render an OpenAPI document as pretty-printed JSON
pub fn to_pretty_json(api: &utoipa::openapi::OpenApi) -> Result<String> {
    api.to_pretty_json()
        .map_err(|e| Error::Application(format!("Failed to render OpenAPI document: {}", e)))
}
