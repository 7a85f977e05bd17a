//! Configuration store
//!
//! [`ConfigStore`] reads an INI file once, keeps its contents as an
//! immutable section -> key -> value mapping and, when given a
//! [`RequiredSchema`], refuses to construct unless every requirement is met.

use std::io::ErrorKind;
use std::path::Path;

use crate::config::parser::{parse_ini, ConfigData, Section};
use crate::config::schema::RequiredSchema;
use crate::config::validation::{ConfigValidator, MissingEntry};
use crate::shared::error::{AppError, AppResult};
use crate::shared::logging::LoggingUtils;

/// Parsed, read-only view of a configuration file
#[derive(Debug, Clone)]
pub struct ConfigStore {
    file_name: String,
    data: ConfigData,
    required_schema: Option<RequiredSchema>,
}

impl ConfigStore {
    /// Load `path` without schema validation
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        Self::load(path, None)
    }

    /// Load `path` and validate it against `schema`
    pub fn open_with_schema(path: impl AsRef<Path>, schema: RequiredSchema) -> AppResult<Self> {
        Self::load(path, Some(schema))
    }

    /// Load `path`, validating against `schema` when one is given
    ///
    /// # Errors
    ///
    /// - [`AppError::FileNotOpened`] if the file cannot be opened or read
    /// - [`AppError::MalformedSyntax`] if the content is not valid INI
    /// - [`AppError::MissingRequiredData`] if the schema is not satisfied
    pub fn load(path: impl AsRef<Path>, schema: Option<RequiredSchema>) -> AppResult<Self> {
        let path = path.as_ref();
        let file_name = path.display().to_string();

        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => AppError::MalformedSyntax {
                path: file_name.clone(),
                reason: "file is not valid UTF-8".to_string(),
            },
            _ => AppError::FileNotOpened {
                path: file_name.clone(),
                reason: e.to_string(),
            },
        })?;

        let data = parse_ini(&file_name, &text)?;
        LoggingUtils::log_loaded(&file_name, data.len());

        let store = Self {
            file_name,
            data,
            required_schema: schema,
        };

        if store.required_schema.is_some() {
            let missing = store.validate();
            LoggingUtils::log_validation(&store.file_name, &missing);
            if !missing.is_empty() {
                return Err(AppError::MissingRequiredData {
                    path: store.file_name,
                    missing,
                });
            }
        }

        Ok(store)
    }

    /// Look up `[section] key`
    ///
    /// On a miss the `fallback` is returned with a warning logged. Without a
    /// fallback the miss is logged as an error and returned as
    /// [`AppError::ValueNotFound`].
    pub fn get_value<'a>(
        &'a self,
        section: &str,
        key: &str,
        fallback: Option<&'a str>,
    ) -> AppResult<&'a str> {
        if let Some(value) = self.data.get(section).and_then(|entries| entries.get(key)) {
            return Ok(value.as_str());
        }

        match fallback {
            Some(fallback) => {
                LoggingUtils::log_fallback_used(section, key, fallback);
                Ok(fallback)
            }
            None => {
                LoggingUtils::log_lookup_failure(section, key);
                Err(AppError::ValueNotFound {
                    section: section.to_string(),
                    key: key.to_string(),
                })
            }
        }
    }

    /// Requirements of the schema not met by this file
    ///
    /// Always empty for a store opened without a schema.
    pub fn validate(&self) -> Vec<MissingEntry> {
        self.required_schema
            .as_ref()
            .map(|schema| ConfigValidator::missing_entries(schema, &self.data))
            .unwrap_or_default()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// All sections and their entries
    pub fn data(&self) -> &ConfigData {
        &self.data
    }

    /// Path the store was loaded from
    pub fn name(&self) -> &str {
        &self.file_name
    }

    pub fn required_schema(&self) -> Option<&RequiredSchema> {
        self.required_schema.as_ref()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.data.get(name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.data
            .get(section)
            .is_some_and(|entries| entries.contains_key(key))
    }
}
