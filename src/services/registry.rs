// src/services/registry.rs

//! Filter registry maintenance.
//!
//! Counts advisories per catalog category and drives the three-state filter
//! machine. The registry is rebuilt wholesale on every reload; user toggles
//! only ever flip `Applied`/`Removed`, and the last applied filter cannot be
//! removed.

use crate::error::{AppError, Result};
use crate::models::{Advisory, FilterCatalog, FilterEntry, FilterRegistry, FilterState};

/// Rebuild the registry from the advisory set and the category catalog.
///
/// Every catalog entry gets a fresh data-driven state: `Applied` when at
/// least one advisory carries the category, `Disabled` otherwise. Prior
/// states are deliberately not consulted; a full reload resets everything.
pub fn recompute(advisories: &[Advisory], catalog: &FilterCatalog) -> FilterRegistry {
    catalog
        .iter()
        .map(|(&code, entry)| {
            let count = advisories.iter().filter(|a| a.category == code).count();
            let state = if count > 0 {
                FilterState::Applied
            } else {
                FilterState::Disabled
            };

            (
                code,
                FilterEntry {
                    category_code: code,
                    display_name: entry.display_name.clone(),
                    count,
                    state,
                },
            )
        })
        .collect()
}

/// Number of entries currently in the `Applied` state.
pub fn total_applied(registry: &FilterRegistry) -> usize {
    registry
        .values()
        .filter(|entry| entry.state == FilterState::Applied)
        .count()
}

/// Toggle the filter for a category, returning its new state.
///
/// An `Applied` entry becomes `Removed` only while another applied entry
/// remains; toggling the last applied entry snaps it back to `Applied`.
/// A `Removed` entry always re-applies. Unknown codes and `Disabled`
/// entries are caller errors; counts are never touched.
pub fn toggle(registry: &mut FilterRegistry, code: u32) -> Result<FilterState> {
    let total = total_applied(registry);

    let entry = registry
        .get_mut(&code)
        .ok_or_else(|| AppError::unknown_filter(code, "not present in registry"))?;

    if entry.state == FilterState::Disabled {
        return Err(AppError::unknown_filter(code, "filter is disabled"));
    }

    entry.state = if entry.state == FilterState::Applied && total > 1 {
        FilterState::Removed
    } else {
        FilterState::Applied
    };

    Ok(entry.state)
}

/// Re-apply every filter that has matching advisories.
///
/// Entries with no data stay `Disabled`.
pub fn reset_all(registry: &mut FilterRegistry) {
    for entry in registry.values_mut() {
        if entry.count > 0 {
            entry.state = FilterState::Applied;
        }
    }
}
