use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::{ConfigError, Result};

/// System configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SystemConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
    #[serde(default = "default_max_request_size")]
    pub max_request_size: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CorsConfig {
    /// Origins allowed by the CORS policy. Empty means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocsConfig {
    #[serde(default = "default_docs_enabled")]
    pub enabled: bool,
    #[serde(default = "default_docs_path")]
    pub path: String,
    #[serde(default = "default_docs_title")]
    pub title: String,
    #[serde(default = "default_docs_description")]
    pub description: String,
    #[serde(default = "default_docs_version")]
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl SystemConfig {
    /// Load system configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let content = std::fs::read_to_string(&path)
            .map_err(|_| ConfigError::FileNotFound { path: path_str })?;

        let config: SystemConfig = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Load configuration from file, falling back to built-in defaults when
    /// the file does not exist. The service can run from environment alone.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment overrides on top of the loaded configuration.
    ///
    /// `PORT` replaces the port of the configured listen address. An
    /// unparseable or zero `PORT` is a configuration error, not a fallback.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(port) = std::env::var("PORT") {
            let port: u16 = port
                .parse()
                .ok()
                .filter(|p| *p != 0)
                .ok_or_else(|| ConfigError::Invalid {
                    message: format!("Invalid PORT environment value '{}'", port),
                })?;
            let host = self
                .server
                .listen
                .rsplit_once(':')
                .map(|(host, _)| host.to_string())
                .ok_or_else(|| ConfigError::Invalid {
                    message: format!("Invalid listen address '{}'", self.server.listen),
                })?;
            self.server.listen = format!("{}:{}", host, port);
        }
        Ok(())
    }

    /// Port of the configured listen address
    pub fn port(&self) -> Result<u16> {
        let port = self
            .server
            .listen
            .rsplit_once(':')
            .and_then(|(_, port)| port.parse().ok())
            .ok_or_else(|| ConfigError::Invalid {
                message: format!("Invalid listen address '{}'", self.server.listen),
            })?;
        Ok(port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_request_size: default_max_request_size(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            enabled: default_docs_enabled(),
            path: default_docs_path(),
            title: default_docs_title(),
            description: default_docs_description(),
            version: default_docs_version(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Default value functions

fn default_listen() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_max_request_size() -> String {
    "1MB".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_docs_enabled() -> bool {
    true
}

fn default_docs_path() -> String {
    "/docs".to_string()
}

fn default_docs_title() -> String {
    "Webhook Inspector API".to_string()
}

fn default_docs_description() -> String {
    "API for capturing and inspecting webhooks in Webhook requests".to_string()
}

fn default_docs_version() -> String {
    "1.0.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
