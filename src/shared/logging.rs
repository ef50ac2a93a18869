//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use std::str::FromStr;
use tracing::{info, warn};

use crate::config::{ClientSettings, DeploymentVariant};
use crate::shared::error::AppError;

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unsupported log format: {}", other))),
        }
    }
}

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified level and format.
    ///
    /// `RUST_LOG` takes precedence over `level` when set. Logs go to stderr so
    /// rendered output on stdout stays clean.
    pub fn initialize(level: &str, format: LogFormat) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .map_err(|e| AppError::Config(format!("Invalid log level '{}': {}", level, e)))?;

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        let result = match format {
            LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
            LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }

    /// Log that a settings record was loaded for a variant
    pub fn log_settings_loaded(variant: DeploymentVariant, settings: &ClientSettings) {
        info!(
            variant = %variant,
            production_mode = settings.production_mode,
            api_server_url = %settings.api_server_url,
            auth_domain_prefix = %settings.auth_domain_prefix,
            fingerprint = %settings.fingerprint(),
            "Settings loaded"
        );
    }

    /// Log a settings rule that is tolerated but suspicious
    pub fn log_settings_warning(variant: DeploymentVariant, field: &str, details: &str) {
        warn!(
            variant = %variant,
            field = %field,
            details = %details,
            "Questionable settings value"
        );
    }
}
