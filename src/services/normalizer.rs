// src/services/normalizer.rs

//! Advisory normalization.
//!
//! Turns raw feed records into canonical advisories. Records missing
//! `category` or `time` are rejected individually; one bad record never
//! takes down the rest of the batch.

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{Advisory, RawRecord};

/// A rejected raw record with its batch position and the decode reason.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RecordIssue {
    /// Index of the record in the incoming batch
    pub index: usize,

    /// Why the record was rejected
    pub reason: String,
}

/// Summary of a normalization pass.
#[derive(Debug, Clone, Default)]
pub struct NormalizeOutcome {
    /// Successfully normalized advisories, in input order
    pub advisories: Vec<Advisory>,

    /// Records that failed to decode
    pub rejected: Vec<RecordIssue>,
}

/// Wrap a raw record into a canonical advisory.
///
/// Recognized fields are copied verbatim; anything unknown was already
/// dropped during decoding.
pub fn normalize(raw: RawRecord) -> Advisory {
    Advisory {
        category: raw.category,
        time: raw.time,
        time_pattern: raw.time_pattern,
        title: raw.title,
        body: raw.body,
        icon_ref: raw.icon_ref,
    }
}

/// Decode and normalize a single raw JSON record.
///
/// A record missing `category` or `time` fails with
/// [`AppError::MalformedRecord`] carrying its batch position.
pub fn normalize_value(index: usize, value: &serde_json::Value) -> Result<Advisory> {
    serde_json::from_value::<RawRecord>(value.clone())
        .map(normalize)
        .map_err(|e| AppError::malformed_record(index, e))
}

/// Normalize a batch of raw JSON records.
///
/// Malformed records are collected into `rejected` and skipped; valid
/// records keep their relative input order.
pub fn normalize_records(raw: &[serde_json::Value]) -> NormalizeOutcome {
    let mut outcome = NormalizeOutcome::default();

    for (index, value) in raw.iter().enumerate() {
        match normalize_value(index, value) {
            Ok(advisory) => outcome.advisories.push(advisory),
            Err(AppError::MalformedRecord { index, reason }) => {
                log::warn!("Rejecting advisory record {index}: {reason}");
                outcome.rejected.push(RecordIssue { index, reason });
            }
            Err(e) => {
                log::warn!("Rejecting advisory record {index}: {e}");
                outcome.rejected.push(RecordIssue {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::EventTime;

    #[test]
    fn test_normalize_copies_fields() {
        let raw = RawRecord {
            category: 5,
            time: EventTime::Span(100, 200),
            time_pattern: "H:i".to_string(),
            title: "Storm".to_string(),
            body: "Severe storm warning".to_string(),
            icon_ref: Some(7),
        };

        let advisory = normalize(raw);
        assert_eq!(advisory.category, 5);
        assert_eq!(advisory.time, EventTime::Span(100, 200));
        assert_eq!(advisory.timestamp(), 100);
        assert_eq!(advisory.icon_ref, Some(7));
    }

    #[test]
    fn test_batch_all_valid() {
        let raw = vec![
            json!({"category": 1, "time": 100, "timePattern": "H:i", "title": "A", "body": ""}),
            json!({"category": 2, "time": [200, 300], "timePattern": "d F", "title": "B", "body": ""}),
        ];

        let outcome = normalize_records(&raw);
        assert_eq!(outcome.advisories.len(), 2);
        assert!(outcome.rejected.is_empty());
        assert_eq!(outcome.advisories[1].timestamp(), 200);
    }

    #[test]
    fn test_batch_skips_malformed_and_continues() {
        let raw = vec![
            json!({"category": 1, "time": 100, "title": "Good", "body": ""}),
            json!({"time": 200, "title": "No category", "body": ""}),
            json!({"category": 3, "title": "No time", "body": ""}),
            json!({"category": 2, "time": 400, "title": "Also good", "body": ""}),
        ];

        let outcome = normalize_records(&raw);
        assert_eq!(outcome.advisories.len(), 2);
        assert_eq!(outcome.advisories[0].title, "Good");
        assert_eq!(outcome.advisories[1].title, "Also good");

        assert_eq!(outcome.rejected.len(), 2);
        assert_eq!(outcome.rejected[0].index, 1);
        assert_eq!(outcome.rejected[1].index, 2);
    }

    #[test]
    fn test_unknown_fields_are_not_an_error() {
        let raw = vec![json!({
            "category": 6,
            "time": 100,
            "timePattern": "H:i",
            "title": "Fog",
            "body": "Low visibility",
            "legacyColor": "#808080"
        })];

        let outcome = normalize_records(&raw);
        assert_eq!(outcome.advisories.len(), 1);
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn test_normalize_value_error_names_index() {
        let value = json!({"title": "no category, no time"});
        let err = normalize_value(4, &value).unwrap_err();
        assert!(matches!(err, AppError::MalformedRecord { index: 4, .. }));
    }

    #[test]
    fn test_empty_batch() {
        let outcome = normalize_records(&[]);
        assert!(outcome.advisories.is_empty());
        assert!(outcome.rejected.is_empty());
    }
}
