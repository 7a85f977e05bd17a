//! Configuration validation module
//!
//! Checks parsed configuration data against a [`RequiredSchema`] and
//! collects every missing section/key pair.

use std::fmt;

use serde::Serialize;

use crate::config::parser::ConfigData;
use crate::config::schema::{RequiredSchema, SectionRequirement, ANY_ENTRY_SENTINEL};

/// A required `(section, key)` pair absent from the configuration
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MissingEntry {
    pub section: String,
    pub key: String,
}

impl MissingEntry {
    pub fn new(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for MissingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.section, self.key)
    }
}

/// Schema validator for parsed configuration data
pub struct ConfigValidator;

impl ConfigValidator {
    /// Collect every requirement of `schema` not met by `data`
    ///
    /// A required section that is absent altogether reports each of its
    /// required keys, or the any-entry sentinel, as missing.
    pub fn missing_entries(schema: &RequiredSchema, data: &ConfigData) -> Vec<MissingEntry> {
        let mut missing = Vec::new();

        for (name, requirement) in schema.sections() {
            let section = data.get(name);
            match requirement {
                SectionRequirement::AnyEntry => {
                    if section.map_or(true, |entries| entries.is_empty()) {
                        missing.push(MissingEntry::new(name, ANY_ENTRY_SENTINEL));
                    }
                }
                SectionRequirement::Keys { keys } => {
                    missing.extend(
                        keys.iter()
                            .filter(|key| section.map_or(true, |entries| !entries.contains_key(*key)))
                            .map(|key| MissingEntry::new(name, key.as_str())),
                    );
                }
            }
        }

        missing
    }
}
