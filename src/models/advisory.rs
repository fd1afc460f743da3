// src/models/advisory.rs

//! Advisory data structures.

use serde::{Deserialize, Serialize};

/// Validity time of an advisory: a point in time or an interval.
///
/// Timestamps are Unix milliseconds. On the wire this is either a bare
/// number or a two-element array `[start, end]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum EventTime {
    /// Point-in-time hazard
    At(i64),

    /// Interval hazard `[start, end]`
    Span(i64, i64),
}

impl EventTime {
    /// The single comparison key: the scalar value, or the interval start.
    pub fn start(&self) -> i64 {
        match *self {
            EventTime::At(ts) => ts,
            EventTime::Span(start, _) => start,
        }
    }
}

/// A raw advisory record as supplied by the feed.
///
/// Unknown fields are ignored for forward compatibility. `category` and
/// `time` are required; everything else falls back to an empty value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Hazard category code
    pub category: u32,

    /// Validity time (point or interval)
    pub time: EventTime,

    /// Token pattern describing how to render `time`
    #[serde(default)]
    pub time_pattern: String,

    /// Advisory headline
    #[serde(default)]
    pub title: String,

    /// Advisory text
    #[serde(default)]
    pub body: String,

    /// Opaque icon reference, passed through unchanged
    #[serde(default)]
    pub icon_ref: Option<u32>,
}

/// A canonical advisory, immutable once normalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    /// Hazard category code
    pub category: u32,

    /// Validity time (point or interval)
    pub time: EventTime,

    /// Token pattern describing how to render `time`
    pub time_pattern: String,

    /// Advisory headline
    pub title: String,

    /// Advisory text
    pub body: String,

    /// Opaque icon reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_ref: Option<u32>,
}

impl Advisory {
    /// The sort/compare key used everywhere: the scalar `time`, or the
    /// interval start.
    pub fn timestamp(&self) -> i64 {
        self.time.start()
    }
}

/// An advisory annotated for display.
///
/// `show_date_separator` is a transient projection artifact, computed fresh
/// on every projection and never written back to the canonical advisory.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayAdvisory {
    #[serde(flatten)]
    pub advisory: Advisory,

    /// Whether this advisory opens a new calendar day in the projected
    /// sequence
    pub show_date_separator: bool,
}
