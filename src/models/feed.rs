// src/models/feed.rs

//! Raw feed payload for a full reload.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::FilterCatalog;

/// Input to a full reload: raw advisory records plus the category catalog.
///
/// Events stay as raw JSON values here so a single malformed record cannot
/// fail the whole payload decode; per-record validation happens in the
/// normalizer. Absent `events` means an empty advisory set, absent `filters`
/// an empty registry.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeedPayload {
    /// Raw advisory records
    #[serde(default)]
    pub events: Vec<serde_json::Value>,

    /// Category catalog: code → display name
    #[serde(default)]
    pub filters: FilterCatalog,
}

impl FeedPayload {
    /// Load a feed payload from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
