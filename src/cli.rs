use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, instrument};

use crate::config::SystemConfig;
use crate::state::WebhookStore;
use crate::types::Result;

#[derive(Parser)]
#[command(name = "webhook-inspector")]
#[command(about = "HTTP API for capturing and inspecting webhooks")]
#[command(long_about = "
A single-binary HTTP service that captures webhook deliveries and exposes
them for inspection, with generated OpenAPI documentation and a reference
UI.
")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, default_value = "/etc/webhook-inspector/config.toml")]
    pub config: PathBuf,

    /// Override the listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override log level
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Run the webhook inspector server (default if no subcommand given)
    Run,
    /// Validate the configuration file
    Validate,
    /// Print the generated OpenAPI document
    Openapi,
    /// Show version information
    Version,
}

impl Cli {
    /// Get effective log level considering verbose/quiet flags
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else if self.quiet {
            LogLevel::Error
        } else {
            self.log_level.clone().unwrap_or(LogLevel::Info)
        }
    }

    /// Convert LogLevel enum to string for the logging module
    pub fn log_level_to_str(&self) -> &'static str {
        match self.effective_log_level() {
            LogLevel::Trace => crate::logging::level::TRACE,
            LogLevel::Debug => crate::logging::level::DEBUG,
            LogLevel::Info => crate::logging::level::INFO,
            LogLevel::Warn => crate::logging::level::WARN,
            LogLevel::Error => crate::logging::level::ERROR,
        }
    }

    /// Get log format override from CLI arguments
    pub fn log_format_override(&self) -> Option<&'static str> {
        self.log_format.as_ref().map(|fmt| match fmt {
            LogFormat::Json => crate::logging::format::JSON,
            LogFormat::Pretty => crate::logging::format::PRETTY,
        })
    }

    /// Load configuration with CLI and environment overrides applied
    pub fn load_config(&self) -> Result<SystemConfig> {
        let mut config = SystemConfig::load_or_default(&self.config)?;
        config.apply_env_overrides()?;
        if let Some(port) = self.port {
            let host = config
                .server
                .listen
                .rsplit_once(':')
                .map(|(host, _)| host.to_string())
                .unwrap_or_else(|| "0.0.0.0".to_string());
            config.server.listen = format!("{}:{}", host, port);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Run the webhook inspector server
#[instrument(skip(cli, config))]
pub async fn run_server(cli: &Cli, config: Option<SystemConfig>) -> Result<()> {
    let config = match config {
        Some(config) => config,
        None => cli.load_config()?,
    };

    info!(
        config_path = %cli.config.display(),
        docs_enabled = config.docs.enabled,
        "Configuration loaded"
    );

    let store = Arc::new(WebhookStore::new());
    let shutdown_signal = setup_shutdown_signal();

    crate::http::start_server(config, store, shutdown_signal).await?;
    Ok(())
}

/// Validate the configuration file
#[instrument(skip(cli))]
pub async fn validate_config(cli: &Cli) -> Result<()> {
    info!("Validating configuration file...");

    let mut config = SystemConfig::load_from_file(&cli.config)?;
    config.apply_env_overrides()?;

    match config.validate() {
        Ok(()) => {
            info!(
                config_path = %cli.config.display(),
                listen = %config.server.listen,
                "Configuration is valid"
            );
            Ok(())
        }
        Err(e) => {
            error!(
                config_path = %cli.config.display(),
                error = %e,
                "Configuration validation failed"
            );
            Err(e)
        }
    }
}

/// Print the generated OpenAPI document to stdout
pub async fn print_openapi(cli: &Cli) -> Result<()> {
    let config = cli.load_config()?;
    let api = crate::http::server::openapi_document(&config);
    println!("{}", crate::docs::to_pretty_json(&api)?);
    Ok(())
}

/// Show version and build information
pub async fn show_version() -> Result<()> {
    println!("webhook-inspector {}", env!("CARGO_PKG_VERSION"));
    println!("Description: {}", env!("CARGO_PKG_DESCRIPTION"));
    println!();

    println!("Build Information:");
    println!(
        "  Build Profile: {}",
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    );
    println!("  Architecture: {}", std::env::consts::ARCH);

    Ok(())
}

/// Set up graceful shutdown signal handling
pub async fn setup_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C");
        },
        _ = terminate => {
            info!("Received SIGTERM");
        },
    }
}
