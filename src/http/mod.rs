//! HTTP server module for the webhook inspector
//!
//! This module provides the HTTP API server functionality including:
//! - Axum-based web server with schema-annotated routing
//! - OpenAPI document generation and the reference UI at the docs path
//! - CORS, tracing, timeout, and body-limit middleware
//! - Graceful shutdown handling
//!
//! The server exposes the following endpoints:
//! - GET /webhooks - List captured webhooks
//! - GET /health - Health check endpoint
//! - GET /docs - API reference UI (when enabled)
//! - GET /docs/openapi.json - Machine-readable API description

pub mod handlers;
pub mod responses;
pub mod server;
pub mod webhooks;

pub use server::start_server;
