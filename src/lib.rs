//! RealSense OPC client configuration
//!
//! This library reads the client's INI startup configuration into an
//! immutable section/key/value store and can verify that required sections
//! and keys are present before the application starts.

pub mod config;
pub mod shared;

#[cfg(test)]
mod tests;

pub use self::config::{ConfigStore, MissingEntry, RequiredSchema, SectionRequirement};
pub use shared::error::{AppError, AppResult};
pub use shared::logging::LoggingUtils;

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;

/// Banner printed when the client shuts down on a configuration error
pub const SHUTDOWN_BANNER: &str = "~~~~~~~~~~~~~~~Error Exited Application~~~~~~~~~~~~~~\n";
