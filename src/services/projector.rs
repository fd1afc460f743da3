// src/services/projector.rs

//! Display projection.
//!
//! Combines the advisory set and the filter registry into the sequence the
//! caller renders: filtered to applied categories, stably sorted by
//! timestamp, and annotated with date-separator markers. Derived on demand;
//! inputs are never mutated.

use crate::models::{Advisory, DisplayAdvisory, FilterRegistry, FilterState};
use crate::services::TimeFormatter;

/// Project advisories into the display sequence.
///
/// The first element always opens with a date separator; every later
/// element carries one iff its calendar day (at the formatter's fixed
/// offset) differs from its predecessor in the filtered, sorted sequence.
pub fn project(
    advisories: &[Advisory],
    registry: &FilterRegistry,
    formatter: &TimeFormatter,
) -> Vec<DisplayAdvisory> {
    let mut visible: Vec<&Advisory> = advisories
        .iter()
        .filter(|a| {
            registry
                .get(&a.category)
                .is_some_and(|entry| entry.state == FilterState::Applied)
        })
        .collect();

    // Stable sort: ties keep their original relative order.
    visible.sort_by_key(|a| a.timestamp());

    let mut previous_day = None;
    visible
        .into_iter()
        .map(|advisory| {
            let day = formatter.civil_date(advisory.timestamp());
            let show_date_separator = previous_day != Some(day);
            previous_day = Some(day);

            DisplayAdvisory {
                advisory: advisory.clone(),
                show_date_separator,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogEntry, EventTime, FilterCatalog, FormatConfig, LocaleConfig};
    use crate::services::registry::{recompute, toggle};

    // Two consecutive days at UTC+3: 2022-09-09 08:00 and 2022-09-10 09:20
    const DAY_A: i64 = 1662699600000;
    const DAY_B: i64 = 1662790800000;

    fn advisory(category: u32, ts: i64, title: &str) -> Advisory {
        Advisory {
            category,
            time: EventTime::At(ts),
            time_pattern: "H:i".to_string(),
            title: title.to_string(),
            body: String::new(),
            icon_ref: None,
        }
    }

    fn catalog(codes: &[(u32, &str)]) -> FilterCatalog {
        codes
            .iter()
            .map(|&(code, name)| {
                (
                    code,
                    CatalogEntry {
                        display_name: name.to_string(),
                    },
                )
            })
            .collect()
    }

    fn formatter() -> TimeFormatter {
        TimeFormatter::new(&FormatConfig::default(), &LocaleConfig::default())
    }

    #[test]
    fn test_filters_to_applied_categories() {
        let advisories = vec![
            advisory(1, DAY_A, "caution"),
            advisory(2, DAY_A + 1000, "danger"),
        ];
        let mut registry = recompute(&advisories, &catalog(&[(1, "Caution"), (2, "Danger")]));
        toggle(&mut registry, 1).unwrap();

        let projected = project(&advisories, &registry, &formatter());
        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].advisory.title, "danger");
    }

    #[test]
    fn test_sorted_ascending_with_separators_across_days() {
        // Concrete scenario: two category-2 advisories on different days
        let advisories = vec![advisory(2, DAY_B, "later"), advisory(2, DAY_A, "earlier")];
        let registry = recompute(&advisories, &catalog(&[(2, "Danger")]));

        let projected = project(&advisories, &registry, &formatter());
        assert_eq!(projected.len(), 2);
        assert_eq!(projected[0].advisory.title, "earlier");
        assert_eq!(projected[1].advisory.title, "later");
        assert!(projected[0].show_date_separator);
        assert!(projected[1].show_date_separator);
    }

    #[test]
    fn test_same_day_suppresses_separator() {
        let advisories = vec![
            advisory(1, DAY_A, "morning"),
            advisory(1, DAY_A + 3_600_000, "noon"),
        ];
        let registry = recompute(&advisories, &catalog(&[(1, "Caution")]));

        let projected = project(&advisories, &registry, &formatter());
        assert!(projected[0].show_date_separator);
        assert!(!projected[1].show_date_separator);
    }

    #[test]
    fn test_separator_compares_filtered_sequence() {
        // The day-A advisory in the middle is filtered out; the two
        // remaining day-B neighbors must not get a second separator.
        let advisories = vec![
            advisory(1, DAY_B, "kept early"),
            advisory(2, DAY_A, "hidden"),
            advisory(1, DAY_B + 1000, "kept late"),
        ];
        let mut registry = recompute(&advisories, &catalog(&[(1, "Caution"), (2, "Danger")]));
        toggle(&mut registry, 2).unwrap();

        let projected = project(&advisories, &registry, &formatter());
        assert_eq!(projected.len(), 2);
        assert!(projected[0].show_date_separator);
        assert!(!projected[1].show_date_separator);
    }

    #[test]
    fn test_stable_order_for_equal_timestamps() {
        let advisories = vec![
            advisory(1, DAY_A, "first in"),
            advisory(2, DAY_A, "second in"),
            advisory(1, DAY_A, "third in"),
        ];
        let registry = recompute(&advisories, &catalog(&[(1, "Caution"), (2, "Danger")]));

        let projected = project(&advisories, &registry, &formatter());
        let titles: Vec<_> = projected.iter().map(|d| d.advisory.title.as_str()).collect();
        assert_eq!(titles, ["first in", "second in", "third in"]);
    }

    #[test]
    fn test_interval_advisories_sort_by_start() {
        let mut span = advisory(1, 0, "span");
        span.time = EventTime::Span(DAY_A + 500, DAY_B);
        let advisories = vec![advisory(1, DAY_A + 1000, "point"), span];
        let registry = recompute(&advisories, &catalog(&[(1, "Caution")]));

        let projected = project(&advisories, &registry, &formatter());
        assert_eq!(projected[0].advisory.title, "span");
        assert_eq!(projected[1].advisory.title, "point");
    }

    #[test]
    fn test_projection_is_idempotent_and_leaves_inputs_alone() {
        let advisories = vec![advisory(1, DAY_A, "a"), advisory(2, DAY_B, "b")];
        let registry = recompute(&advisories, &catalog(&[(1, "Caution"), (2, "Danger")]));
        let tf = formatter();

        let first = project(&advisories, &registry, &tf);
        let second = project(&advisories, &registry, &tf);
        assert_eq!(first, second);

        // Canonical advisories never learn about separators
        assert_eq!(advisories[0].title, "a");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_inputs_project_to_empty() {
        let registry = recompute(&[], &catalog(&[(1, "Caution")]));
        assert!(project(&[], &registry, &formatter()).is_empty());
    }
}
