use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use utoipa::ToSchema;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Application error: {0}")]
    Application(String),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config file parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

/// Type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

/// A webhook request captured by the inspector
///
/// One record per received request. The store keeps them in arrival order;
/// `id` is assigned by the store at insertion time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CapturedWebhook {
    /// Store-assigned identifier, unique within a process lifetime
    pub id: u64,
    /// HTTP method of the captured request
    pub method: String,
    /// Request path the webhook was delivered to
    pub path: String,
    /// Request headers, sorted by name
    pub headers: BTreeMap<String, String>,
    /// Raw request body (UTF-8 lossy)
    pub body: String,
    /// When the request was received
    pub received_at: DateTime<Utc>,
}

impl CapturedWebhook {
    /// Create a record for a request received now. The store overwrites `id`.
    pub fn new(method: String, path: String) -> Self {
        Self {
            id: 0,
            method,
            path,
            headers: BTreeMap::new(),
            body: String::new(),
            received_at: Utc::now(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}
