//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use tracing::{debug, error, info, warn};

use crate::config::MissingEntry;

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified default level
    ///
    /// `RUST_LOG` takes precedence over `level` when set.
    pub fn initialize(level: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| crate::shared::error::AppError::Internal(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }

    /// Log a successfully parsed configuration file
    pub fn log_loaded(file_name: &str, sections: usize) {
        info!(
            file = %file_name,
            sections = %sections,
            "Configuration file loaded"
        );
    }

    /// Log a lookup that fell back to the caller's default
    pub fn log_fallback_used(section: &str, key: &str, fallback: &str) {
        warn!(
            section = %section,
            key = %key,
            fallback = %fallback,
            "Failed to get value from \"[{}]: {}\". Defaulting to \"{}\"",
            section,
            key,
            fallback
        );
    }

    /// Log a lookup failure that is about to propagate to the caller
    pub fn log_lookup_failure(section: &str, key: &str) {
        error!(
            section = %section,
            key = %key,
            "Failed to get value from \"[{}]: {}\"",
            section,
            key
        );
    }

    /// Log the outcome of schema validation
    pub fn log_validation(file_name: &str, missing: &[MissingEntry]) {
        if missing.is_empty() {
            debug!(file = %file_name, "Configuration satisfies required schema");
        } else {
            debug!(
                file = %file_name,
                missing = %missing.len(),
                "Configuration is missing required data"
            );
        }
    }
}
