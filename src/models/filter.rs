// src/models/filter.rs

//! Filter registry data structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Visibility state of a category filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FilterState {
    /// Visible: advisories of this category are shown
    Applied,

    /// Hidden by user action
    Removed,

    /// Hidden because no advisory carries this category; never user-settable
    Disabled,
}

/// A catalog entry naming a category, as supplied with the feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Display name for the category
    pub display_name: String,
}

/// Per-category filter with live count and state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterEntry {
    /// Category code this entry controls
    pub category_code: u32,

    /// Display name from the catalog
    pub display_name: String,

    /// Number of advisories in the current set with this category
    pub count: usize,

    /// Current visibility state
    pub state: FilterState,
}

/// The filter registry: category code → filter entry.
///
/// A `BTreeMap` keeps iteration and serialized key order deterministic.
pub type FilterRegistry = BTreeMap<u32, FilterEntry>;

/// The category catalog: category code → display name entry.
pub type FilterCatalog = BTreeMap<u32, CatalogEntry>;
