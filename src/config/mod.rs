pub mod types;
mod validators;

// Re-export all public types
pub use types::*;

pub(crate) use validators::parse_size_string;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validators::{
        validate_docs_path, validate_listen_address, validate_origin, validate_positive_timeout,
        validate_request_size,
    };
    use std::io::Write;
    use tempfile::NamedTempFile;

    // Test utilities
    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_system_config_complete() {
        let config_toml = r#"
[server]
listen = "127.0.0.1:8080"
max_request_size = "2MB"
request_timeout = 60

[cors]
allowed_origins = ["http://localhost:3000", "https://inspector.example.com"]

[docs]
enabled = true
path = "/docs"
title = "Webhook Inspector API"
description = "API for capturing and inspecting webhooks in Webhook requests"
version = "1.0.0"

[logging]
level = "debug"
format = "json"
        "#;

        let config: SystemConfig = toml::from_str(config_toml).unwrap();

        assert_eq!(config.server.listen, "127.0.0.1:8080");
        assert_eq!(config.server.max_request_size, "2MB");
        assert_eq!(config.server.request_timeout, 60);

        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://localhost:3000", "https://inspector.example.com"]
        );

        assert!(config.docs.enabled);
        assert_eq!(config.docs.path, "/docs");
        assert_eq!(config.docs.title, "Webhook Inspector API");
        assert_eq!(config.docs.version, "1.0.0");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");

        config.validate().unwrap();
    }

    #[test]
    fn test_system_config_minimal() {
        let config: SystemConfig = toml::from_str("").unwrap();

        assert_eq!(config.server.listen, "0.0.0.0:3000"); // default
        assert_eq!(config.server.max_request_size, "1MB"); // default
        assert_eq!(config.server.request_timeout, 30); // default
        assert!(config.cors.allowed_origins.is_empty()); // default: any origin
        assert!(config.docs.enabled); // default
        assert_eq!(config.docs.path, "/docs"); // default
        assert_eq!(config.docs.title, "Webhook Inspector API");
        assert_eq!(
            config.docs.description,
            "API for capturing and inspecting webhooks in Webhook requests"
        );
        assert_eq!(config.docs.version, "1.0.0");
        assert_eq!(config.logging.level, "info"); // default
        assert_eq!(config.logging.format, "pretty"); // default

        config.validate().unwrap();
    }

    #[test]
    fn test_load_from_file() {
        let file = create_temp_file(
            r#"
[server]
listen = "127.0.0.1:4010"
        "#,
        );

        let config = SystemConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.server.listen, "127.0.0.1:4010");
        assert_eq!(config.port().unwrap(), 4010);
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = SystemConfig::load_from_file("/nonexistent/config.toml");
        assert!(matches!(
            result,
            Err(crate::types::Error::Config(
                crate::types::ConfigError::FileNotFound { .. }
            ))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = SystemConfig::load_or_default("/nonexistent/config.toml").unwrap();
        assert_eq!(config, SystemConfig::default());
    }

    #[test]
    fn test_load_from_malformed_file() {
        let file = create_temp_file("[server\nlisten = ");
        let result = SystemConfig::load_from_file(file.path());
        assert!(matches!(
            result,
            Err(crate::types::Error::Config(
                crate::types::ConfigError::ParseError(_)
            ))
        ));
    }

    #[test]
    fn test_identical_loads_are_equal() {
        let file = create_temp_file(
            r#"
[server]
listen = "0.0.0.0:3000"

[cors]
allowed_origins = ["http://localhost:3000"]
        "#,
        );

        let first = SystemConfig::load_from_file(file.path()).unwrap();
        let second = SystemConfig::load_from_file(file.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_port_extraction() {
        let mut config = SystemConfig::default();
        assert_eq!(config.port().unwrap(), 3000);

        config.server.listen = "0.0.0.0:notaport".to_string();
        assert!(config.port().is_err());
    }

    #[test]
    fn test_validate_listen_address() {
        // Valid addresses
        assert!(validate_listen_address("127.0.0.1:8080").is_ok());
        assert!(validate_listen_address("0.0.0.0:3000").is_ok());
        assert!(validate_listen_address("[::1]:8080").is_ok());

        // Invalid addresses
        assert!(validate_listen_address("invalid").is_err());
        assert!(validate_listen_address("127.0.0.1").is_err());
        assert!(validate_listen_address("127.0.0.1:99999").is_err());
    }

    #[test]
    fn test_validate_origin() {
        assert!(validate_origin("http://localhost:3000").is_ok());
        assert!(validate_origin("https://inspector.example.com").is_ok());

        assert!(validate_origin("localhost:3000").is_err());
        assert!(validate_origin("ftp://example.com").is_err());
        assert!(validate_origin("http://bad value").is_err());
    }

    #[test]
    fn test_validate_docs_path() {
        assert!(validate_docs_path("/docs").is_ok());
        assert!(validate_docs_path("/api-reference").is_ok());

        assert!(validate_docs_path("docs").is_err());
        assert!(validate_docs_path("/").is_err());
        assert!(validate_docs_path("/docs/").is_err());
    }

    #[test]
    fn test_validate_request_size_and_timeout() {
        assert!(validate_request_size("1MB").is_ok());
        assert!(validate_request_size("1024").is_ok());
        assert!(validate_request_size("0").is_err());
        assert!(validate_request_size("huge").is_err());

        assert!(validate_positive_timeout(30, "server.request_timeout").is_ok());
        assert!(validate_positive_timeout(0, "server.request_timeout").is_err());
    }

    #[test]
    fn test_parse_size_string() {
        assert_eq!(parse_size_string("1024").unwrap(), 1024);
        assert_eq!(parse_size_string("1KB").unwrap(), 1024);
        assert_eq!(parse_size_string("1MB").unwrap(), 1024 * 1024);
        assert_eq!(parse_size_string("1GB").unwrap(), 1024 * 1024 * 1024);
        assert_eq!(parse_size_string("2mb").unwrap(), 2 * 1024 * 1024);
        assert!(parse_size_string("1TB").is_err());
        // Overflowing but parseable sizes are an error, not a panic
        assert!(parse_size_string("99999999999999999GB").is_err());
        assert!(parse_size_string("18446744073709551615KB").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let mut config = SystemConfig::default();
        config.server.listen = "nowhere".to_string();
        assert!(config.validate().is_err());

        let mut config = SystemConfig::default();
        config.cors.allowed_origins = vec!["not-an-origin".to_string()];
        assert!(config.validate().is_err());

        let mut config = SystemConfig::default();
        config.docs.path = "docs".to_string();
        assert!(config.validate().is_err());

        // Disabled docs skip the path check
        let mut config = SystemConfig::default();
        config.docs.enabled = false;
        config.docs.path = String::new();
        assert!(config.validate().is_ok());
    }
}
