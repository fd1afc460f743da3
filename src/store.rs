// src/store.rs

//! Advisory store: the owned state container behind the display.
//!
//! Holds the canonical advisory set and the filter registry, and exposes
//! the two mutation entry points (full reload, filter toggle) plus
//! on-demand projections. The surrounding event loop dispatches calls
//! serially; the store itself is single-writer.

use serde::Serialize;

use crate::error::Result;
use crate::models::{
    Advisory, Config, DisplayAdvisory, FeedPayload, FilterRegistry, FilterState, LocaleConfig,
};
use crate::services::{self, RecordIssue, TimeFormatter};

/// Summary of a reload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReloadReport {
    /// Number of advisories accepted into the store
    pub loaded: usize,

    /// Records rejected at the normalization boundary
    pub rejected: Vec<RecordIssue>,
}

impl ReloadReport {
    /// Whether every record in the batch was accepted.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Owned advisory state: advisories, filter registry, and the fixed-locale
/// formatter.
#[derive(Debug, Clone)]
pub struct AdvisoryStore {
    advisories: Vec<Advisory>,
    registry: FilterRegistry,
    formatter: TimeFormatter,
}

impl AdvisoryStore {
    /// Create an empty store from the application configuration.
    pub fn new(config: &Config, locale: &LocaleConfig) -> Self {
        Self {
            advisories: Vec::new(),
            registry: FilterRegistry::new(),
            formatter: TimeFormatter::new(&config.format, locale),
        }
    }

    /// Replace the advisory set and rebuild the registry from a feed
    /// payload.
    ///
    /// Recomputation is total: every category present in the payload's
    /// catalog gets a fresh data-driven state, regardless of what the user
    /// had toggled before. Malformed records are skipped and reported.
    pub fn reload(&mut self, payload: FeedPayload) -> ReloadReport {
        let outcome = services::normalize_records(&payload.events);

        self.advisories = outcome.advisories;
        self.registry = services::recompute(&self.advisories, &payload.filters);

        log::debug!(
            "Reloaded {} advisories across {} categories ({} rejected)",
            self.advisories.len(),
            self.registry.len(),
            outcome.rejected.len()
        );

        ReloadReport {
            loaded: self.advisories.len(),
            rejected: outcome.rejected,
        }
    }

    /// Toggle the filter for a category, returning its new state.
    pub fn toggle(&mut self, code: u32) -> Result<FilterState> {
        services::toggle(&mut self.registry, code)
    }

    /// Re-apply every filter that has matching advisories.
    pub fn reset_filters(&mut self) {
        services::reset_all(&mut self.registry);
    }

    /// Number of currently applied filters.
    pub fn total_applied(&self) -> usize {
        services::total_applied(&self.registry)
    }

    /// The display sequence: filtered, sorted, separator-annotated.
    ///
    /// Computed fresh on every call from the current state.
    pub fn visible(&self) -> Vec<DisplayAdvisory> {
        services::project(&self.advisories, &self.registry, &self.formatter)
    }

    /// Read-only registry snapshot.
    pub fn filters(&self) -> &FilterRegistry {
        &self.registry
    }

    /// Read-only canonical advisory set.
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// The fixed-locale formatter, for rendering advisory times.
    pub fn formatter(&self) -> &TimeFormatter {
        &self.formatter
    }
}
