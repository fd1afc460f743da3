// src/services/mod.rs

//! Core advisory services: normalization, time formatting, filter registry
//! maintenance, and display projection.

pub mod normalizer;
pub mod projector;
pub mod registry;
pub mod timefmt;

pub use normalizer::{NormalizeOutcome, RecordIssue, normalize, normalize_records, normalize_value};
pub use projector::project;
pub use registry::{recompute, reset_all, toggle, total_applied};
pub use timefmt::TimeFormatter;
