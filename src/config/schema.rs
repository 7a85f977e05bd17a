//! Required-data schema
//!
//! Describes which sections and keys a configuration file must provide.
//! A schema can be built in code, loaded from a TOML document, or converted
//! from the loose nested section/key mapping used by older callers.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use crate::shared::error::{AppError, AppResult};

/// Section name that legacy nested schemas treat as "any entry will do"
pub const NODES_SECTION: &str = "nodes";

/// Key reported for an [`SectionRequirement::AnyEntry`] section with no entries
pub const ANY_ENTRY_SENTINEL: &str = "any_node";

/// What a single required section must contain
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "require", rename_all = "snake_case")]
pub enum SectionRequirement {
    /// Every named key must be present in the section
    Keys {
        #[serde(default)]
        keys: BTreeSet<String>,
    },
    /// The section must hold at least one entry, whatever its name
    AnyEntry,
}

impl SectionRequirement {
    /// Requirement for the given key names
    pub fn keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        SectionRequirement::Keys {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

/// Caller-supplied minimum set of sections and keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RequiredSchema {
    #[serde(default)]
    sections: BTreeMap<String, SectionRequirement>,
}

impl RequiredSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `keys` in `section`
    ///
    /// Repeated calls for the same section accumulate keys. An earlier
    /// any-entry requirement for the section is replaced.
    pub fn require_keys<S, I, K>(mut self, section: S, keys: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let requirement = self
            .sections
            .entry(section.into())
            .or_insert_with(|| SectionRequirement::Keys {
                keys: BTreeSet::new(),
            });
        if let SectionRequirement::AnyEntry = requirement {
            *requirement = SectionRequirement::Keys {
                keys: BTreeSet::new(),
            };
        }
        if let SectionRequirement::Keys { keys: existing } = requirement {
            existing.extend(keys.into_iter().map(Into::into));
        }
        self
    }

    /// Require at least one entry of any name in `section`
    pub fn require_any_entry(mut self, section: impl Into<String>) -> Self {
        self.sections
            .insert(section.into(), SectionRequirement::AnyEntry);
        self
    }

    /// Convert the loose nested shape `section -> key -> placeholder`
    ///
    /// Placeholder values are ignored. A section named `nodes` becomes an
    /// any-entry requirement regardless of the keys listed under it.
    pub fn from_nested<I, S, J, K, V>(nested: I) -> Self
    where
        I: IntoIterator<Item = (S, J)>,
        S: Into<String>,
        J: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        nested
            .into_iter()
            .fold(Self::new(), |schema, (section, entries)| {
                let section = section.into();
                if section == NODES_SECTION {
                    schema.require_any_entry(section)
                } else {
                    schema.require_keys(section, entries.into_iter().map(|(key, _)| key))
                }
            })
    }

    /// Parse a schema from a TOML document
    pub fn from_toml_str(source: &str) -> AppResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a schema from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            AppError::Schema(format!("Failed to read schema {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&source)
    }

    /// Requirement registered for `section`, if any
    pub fn get(&self, section: &str) -> Option<&SectionRequirement> {
        self.sections.get(section)
    }

    /// Iterate requirements in section-name order
    pub fn sections(&self) -> impl Iterator<Item = (&str, &SectionRequirement)> {
        self.sections.iter().map(|(name, req)| (name.as_str(), req))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
