//! Error handling module
//!
//! This module provides centralized error handling for the configuration store.

use thiserror::Error;

use crate::config::MissingEntry;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// The backing file could not be located, opened or read
    #[error("\"{path}\" was not found: {reason}")]
    FileNotOpened { path: String, reason: String },

    /// The INI parser rejected the file content
    #[error("\"{path}\" could not be parsed: {reason}")]
    MalformedSyntax { path: String, reason: String },

    /// Schema validation found absent sections or keys
    #[error("\"{path}\" is missing required configuration data: {}", format_missing(.missing))]
    MissingRequiredData {
        path: String,
        missing: Vec<MissingEntry>,
    },

    /// A lookup found no value and no fallback was supplied
    #[error("Failed to get value from \"[{section}]: {key}\"")]
    ValueNotFound { section: String, key: String },

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Missing pairs carried by a validation failure, empty otherwise
    pub fn missing_entries(&self) -> &[MissingEntry] {
        match self {
            AppError::MissingRequiredData { missing, .. } => missing.as_slice(),
            _ => &[],
        }
    }
}

fn format_missing(missing: &[MissingEntry]) -> String {
    let pairs: Vec<String> = missing.iter().map(ToString::to_string).collect();
    format!("[{}]", pairs.join(", "))
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Schema(err.to_string())
    }
}
