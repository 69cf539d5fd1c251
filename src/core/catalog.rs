//! Character catalog and daily target selection
//!
//! The catalog file is a JSON object mapping character name to record.
//! Names are kept in lexicographic order so the day-of-year index always
//! lands on the same character for the same catalog.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::types::CharacterRecord;

/// Error type for catalog loading and lookups
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog is empty")]
    Empty,
    #[error("character '{0}' not found")]
    NotFound(String),
}

/// Autocomplete entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub name: String,
    pub image: Option<String>,
}

/// All known characters, keyed by name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    characters: BTreeMap<String, CharacterRecord>,
}

impl Catalog {
    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), characters = catalog.len(), "loaded character catalog");
        Ok(catalog)
    }

    /// Parse a catalog from JSON text
    ///
    /// A record without a `name` takes its key as name.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, CharacterRecord> = serde_json::from_str(json)?;
        let characters = raw
            .into_iter()
            .map(|(key, mut record)| {
                if record.name.as_deref().map_or(true, str::is_empty) {
                    record.name = Some(key.clone());
                }
                (key, record)
            })
            .collect();
        Ok(Self { characters })
    }

    /// Build a catalog from records; records without a name are skipped
    pub fn from_records(records: impl IntoIterator<Item = CharacterRecord>) -> Self {
        let mut characters = BTreeMap::new();
        for record in records {
            match record.name.clone().filter(|n| !n.is_empty()) {
                Some(name) => {
                    characters.insert(name, record);
                }
                None => warn!("skipping character record without a name"),
            }
        }
        Self { characters }
    }

    /// Look up a character by exact name
    pub fn get(&self, name: &str) -> Option<&CharacterRecord> {
        self.characters.get(name)
    }

    /// Look up a character, failing with `NotFound`
    pub fn require(&self, name: &str) -> Result<&CharacterRecord, CatalogError> {
        self.get(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Character names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.characters.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Target character for a given (UTC) date
    pub fn daily_target(&self, date: NaiveDate) -> Result<&CharacterRecord, CatalogError> {
        let index = daily_index(date, self.len()).ok_or(CatalogError::Empty)?;
        let record = self
            .characters
            .values()
            .nth(index)
            .ok_or(CatalogError::Empty)?;
        debug!(%date, index, name = record.display_name(), "selected daily target");
        Ok(record)
    }

    /// Autocomplete feed: every name with its first image URL
    pub fn list_entries(&self, image_base: &str) -> Vec<ListEntry> {
        let base = image_base.trim_end_matches('/');
        self.characters
            .iter()
            .map(|(name, record)| ListEntry {
                name: name.clone(),
                image: record.first_image().map(|img| format!("{}/{}", base, img)),
            })
            .collect()
    }
}

/// Index of the daily target: `(day_of_year - 1) mod len`
pub fn daily_index(date: NaiveDate, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(date.ordinal0() as usize % len)
}
