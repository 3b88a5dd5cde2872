//! In-memory configuration document.
//!
//! Responsibilities:
//! - Turn INI text into an immutable map of sections via `rust-ini`.
//! - Fold keys to lower case so lookups are case-insensitive.
//! - Fold `[DEFAULT]` entries into every other section.
//!
//! Does NOT handle:
//! - Path resolution or file I/O (see `source.rs`).
//! - Typed lookup errors (see `reader.rs`).
//!
//! Invariants:
//! - Section names are case-sensitive; keys are not.
//! - Values are stored verbatim apart from surrounding whitespace.
//! - Entries outside of any section are rejected.

use std::collections::BTreeMap;
use std::ops::Index;

use ini::{Ini, ParseOption};
use serde::Serialize;

use crate::constants::DEFAULT_SECTION;

/// A named group of key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Section {
    entries: BTreeMap<String, String>,
}

impl Section {
    /// Returns the raw value for `key`, matched case-insensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&fold_key(key)).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&fold_key(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order. Keys are reported lower-cased.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, key: &str, value: &str) {
        self.entries.insert(fold_key(key), value.to_string());
    }
}

impl Index<&str> for Section {
    type Output = str;

    /// Panics when the key is absent; use [`Section::get`] to handle that case.
    fn index(&self, key: &str) -> &str {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no key '{key}' in section"),
        }
    }
}

/// A fully loaded configuration, organized into sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Document {
    sections: BTreeMap<String, Section>,
}

impl Document {
    /// Parses INI text. The error string describes the first syntax problem.
    pub(crate) fn parse(text: &str) -> Result<Self, String> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(text, options).map_err(|e| e.to_string())?;

        let mut sections: BTreeMap<String, Section> = BTreeMap::new();
        let mut defaults = Section::default();

        for (name, properties) in ini.iter() {
            let (name, target) = match name {
                None => match properties.iter().next() {
                    None => continue,
                    Some((key, _)) => {
                        return Err(format!("entry '{key}' appears before any section header"));
                    }
                },
                Some(DEFAULT_SECTION) => (DEFAULT_SECTION, &mut defaults),
                Some(name) => (name, sections.entry(name.to_string()).or_default()),
            };
            for (key, value) in properties.iter() {
                if target.contains_key(key) {
                    tracing::warn!(section = name, key, "Repeated key, keeping the last value");
                }
                target.insert(key, value);
            }
        }

        if !defaults.is_empty() {
            tracing::debug!(
                keys = defaults.len(),
                sections = sections.len(),
                "Applying [DEFAULT] entries to every section"
            );
        }

        for section in sections.values_mut() {
            for (key, value) in &defaults.entries {
                section
                    .entries
                    .entry(key.clone())
                    .or_insert_with(|| value.clone());
            }
        }

        Ok(Self { sections })
    }

    pub(crate) fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub(crate) fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.sections.len()
    }
}

fn fold_key(key: &str) -> String {
    key.trim().to_lowercase()
}
