use std::net::SocketAddr;

use super::types::SystemConfig;
use crate::types::Result;

// Validation helper functions

/// Validate listen address format (host:port)
pub(crate) fn validate_listen_address(addr: &str) -> Result<()> {
    addr.parse::<SocketAddr>()
        .map_err(|_| crate::types::Error::Validation {
            field: "server.listen".to_string(),
            message: format!(
                "Invalid listen address format '{}'. Expected format: 'host:port' (e.g., '0.0.0.0:3000')",
                addr
            ),
        })?;
    Ok(())
}

/// Validate positive timeout value
pub(crate) fn validate_positive_timeout(value: u64, field: &str) -> Result<()> {
    if value == 0 {
        return Err(crate::types::Error::Validation {
            field: field.to_string(),
            message: "Timeout must be greater than 0".to_string(),
        });
    }
    Ok(())
}

/// Parse size string with units (KB, MB, GB) into bytes
pub(crate) fn parse_size_string(size: &str) -> Result<u64> {
    let size = size.trim().to_uppercase();

    let invalid = |message: String| crate::types::Error::Validation {
        field: "size".to_string(),
        message,
    };

    for (suffix, multiplier) in [
        ("KB", 1024u64),
        ("MB", 1024 * 1024),
        ("GB", 1024 * 1024 * 1024),
    ] {
        if let Some(number) = size.strip_suffix(suffix) {
            let bytes = number
                .trim()
                .parse::<u64>()
                .map_err(|_| invalid(format!("Invalid number in size '{}'", size)))?;
            return bytes
                .checked_mul(multiplier)
                .ok_or_else(|| invalid(format!("Size '{}' is too large", size)));
        }
    }

    // Plain bytes
    size.parse::<u64>().map_err(|_| {
        invalid(format!(
            "Invalid size format '{}'. Expected format: number + unit (KB/MB/GB) or plain bytes",
            size
        ))
    })
}

/// Validate request size string and check it is non-zero
pub(crate) fn validate_request_size(size: &str) -> Result<()> {
    let bytes = parse_size_string(size).map_err(|mut e| {
        if let crate::types::Error::Validation { field, .. } = &mut e {
            *field = "server.max_request_size".to_string();
        }
        e
    })?;
    if bytes == 0 {
        return Err(crate::types::Error::Validation {
            field: "server.max_request_size".to_string(),
            message: "Request size limit must be greater than 0".to_string(),
        });
    }
    Ok(())
}

/// Validate a CORS origin entry parses as an HTTP header value with a scheme
pub(crate) fn validate_origin(origin: &str) -> Result<()> {
    let well_formed = (origin.starts_with("http://") || origin.starts_with("https://"))
        && origin.parse::<axum::http::HeaderValue>().is_ok();
    if !well_formed {
        return Err(crate::types::Error::Validation {
            field: "cors.allowed_origins".to_string(),
            message: format!(
                "Invalid origin '{}'. Expected format: 'scheme://host[:port]' (e.g., 'http://localhost:3000')",
                origin
            ),
        });
    }
    Ok(())
}

/// Validate the documentation path prefix
pub(crate) fn validate_docs_path(path: &str) -> Result<()> {
    if !path.starts_with('/') || path.len() < 2 || path.ends_with('/') {
        return Err(crate::types::Error::Validation {
            field: "docs.path".to_string(),
            message: format!(
                "Invalid docs path '{}'. Expected a non-root path starting with '/' and without a trailing slash",
                path
            ),
        });
    }
    Ok(())
}

impl SystemConfig {
    /// Validate the complete system configuration
    pub fn validate(&self) -> Result<()> {
        validate_listen_address(&self.server.listen)?;
        validate_request_size(&self.server.max_request_size)?;
        validate_positive_timeout(self.server.request_timeout, "server.request_timeout")?;

        for origin in &self.cors.allowed_origins {
            validate_origin(origin)?;
        }

        if self.docs.enabled {
            validate_docs_path(&self.docs.path)?;
        }

        Ok(())
    }
}
