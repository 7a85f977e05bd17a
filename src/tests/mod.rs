//! Crate-level test suite
//!
//! - `common`: temporary config files and log capture
//! - `integration`: end-to-end loading, validation and lookup scenarios

pub mod common;
