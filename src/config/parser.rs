//! INI parsing
//!
//! Turns INI text into a section -> key -> value mapping using `rust-ini`.
//! Quote and escape processing are disabled so values come back exactly as
//! written, and repeated sections or keys are rejected rather than merged.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use ini::{Ini, ParseOption};

use crate::shared::error::{AppError, AppResult};

/// Key -> value pairs of a single section
pub type Section = BTreeMap<String, String>;

/// Section name -> section contents
pub type ConfigData = BTreeMap<String, Section>;

/// Parse INI `text` read from `path`
///
/// Keys outside of any `[section]` header, a section header that appears
/// twice, and a key repeated within a section are all malformed syntax.
pub fn parse_ini(path: &str, text: &str) -> AppResult<ConfigData> {
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..Default::default()
    };
    let parsed = Ini::load_from_str_opt(text, options).map_err(|e| malformed(path, e))?;

    let mut data = ConfigData::new();
    for (name, properties) in parsed.iter() {
        let name = match name {
            Some(name) => name,
            None => match properties.iter().next() {
                Some((key, _)) => {
                    return Err(malformed(
                        path,
                        format!("key \"{}\" appears before any section header", key),
                    ))
                }
                None => continue,
            },
        };

        let section = match data.entry(name.to_string()) {
            Entry::Vacant(entry) => entry.insert(Section::new()),
            Entry::Occupied(_) => {
                return Err(malformed(path, format!("section \"{}\" appears more than once", name)))
            }
        };

        for (key, value) in properties.iter() {
            if section.insert(key.to_string(), value.to_string()).is_some() {
                return Err(malformed(
                    path,
                    format!("key \"{}\" appears more than once in section \"{}\"", key, name),
                ));
            }
        }
    }

    Ok(data)
}

fn malformed(path: &str, err: impl std::fmt::Display) -> AppError {
    AppError::MalformedSyntax {
        path: path.to_string(),
        reason: err.to_string(),
    }
}
