//! HTTP server setup and configuration
//!
//! The bootstrap is a single linear sequence: assemble the schema-annotated
//! router, attach documentation generation and the reference UI, apply the
//! CORS policy, bind the listener, and serve. The startup announcement runs
//! only after the bind has succeeded.

use axum::http::{header, HeaderValue, Method};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::{CorsConfig, SystemConfig},
    docs,
    http::{handlers::*, webhooks},
    state::WebhookStore,
    types::Result,
};

/// Start the HTTP server with the given configuration
///
/// Returns once the shutdown signal has resolved and in-flight requests have
/// drained. A bind failure is returned as an error; the caller treats it as
/// fatal.
pub async fn start_server(
    config: SystemConfig,
    store: Arc<WebhookStore>,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let app_state = Arc::new(AppState::new(config.clone(), store));
    let router = create_router(app_state, &config)?;

    let addr = parse_listen_address(&config.server.listen)?;

    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        error!(
            error = %e,
            addr = %addr,
            "Failed to bind to address"
        );
        crate::types::Error::Io(e)
    })?;

    let local_addr = listener.local_addr().unwrap_or(addr);
    let port = local_addr.port();

    info!("HTTP server running on http://localhost:{}", port);
    if config.docs.enabled {
        info!(
            "Docs available at http://localhost:{}{}",
            port, config.docs.path
        );
    }

    let server = axum::serve(listener, router).with_graceful_shutdown(async {
        shutdown_signal.await;
        info!("Shutdown signal received, starting graceful shutdown");
    });

    if let Err(e) = server.await {
        error!(error = %e, "HTTP server error");
        return Err(crate::types::Error::Io(e));
    }

    info!("HTTP server shutdown complete");
    Ok(())
}

/// Create the Axum router with all endpoints and middleware
///
/// Route collections are declared with their schema'd types and merged
/// first, then the assembled OpenAPI document and the reference UI are
/// attached, then the cross-cutting layers. Nothing here touches the
/// network. An unparseable request-size limit is an error; the caller
/// treats it as fatal.
fn create_router(app_state: Arc<AppState>, config: &SystemConfig) -> Result<axum::Router> {
    let max_request_bytes =
        crate::config::parse_size_string(&config.server.max_request_size)? as usize;

    let (router, api) = api_router(config).split_for_parts();

    let router = if config.docs.enabled {
        let spec_path = format!("{}/openapi.json", config.docs.path);
        router.merge(SwaggerUi::new(config.docs.path.clone()).url(spec_path, api))
    } else {
        router
    };

    Ok(router
        .fallback(handle_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout,
        )))
        .layer(RequestBodyLimitLayer::new(max_request_bytes))
        .layer(cors_layer(&config.cors))
        .with_state(app_state))
}

/// Schema-annotated router of all API operations
fn api_router(config: &SystemConfig) -> OpenApiRouter<Arc<AppState>> {
    OpenApiRouter::with_openapi(docs::base_openapi(&config.docs))
        .merge(webhooks::router())
        .routes(routes!(handle_health))
}

/// The OpenAPI document the server would expose for this configuration
pub fn openapi_document(config: &SystemConfig) -> utoipa::openapi::OpenApi {
    let (_router, api) = api_router(config).split_for_parts();
    api
}

/// CORS policy from configuration; no configured origins means any origin
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Parse the listen address from configuration
fn parse_listen_address(listen: &str) -> Result<SocketAddr> {
    listen.parse().map_err(|e| {
        error!(
            listen_addr = %listen,
            error = %e,
            "Invalid listen address format"
        );
        crate::types::Error::Config(crate::types::ConfigError::Invalid {
            message: format!("Invalid listen address '{}': {}", listen, e),
        })
    })
}
