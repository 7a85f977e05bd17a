//! Configuration management module
//!
//! This module handles loading INI configuration files, validating them
//! against a required schema, and providing read-only access to their values.

pub mod parser;
pub mod schema;
pub mod store;
pub mod validation;

pub use parser::{ConfigData, Section};
pub use schema::{RequiredSchema, SectionRequirement, ANY_ENTRY_SENTINEL, NODES_SECTION};
pub use store::ConfigStore;
pub use validation::{ConfigValidator, MissingEntry};
