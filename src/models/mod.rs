// src/models/mod.rs

//! Domain models for the advisory application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod advisory;
mod config;
mod feed;
mod filter;

// Re-export all public types
pub use advisory::{Advisory, DisplayAdvisory, EventTime, RawRecord};
pub use config::{Config, FormatConfig, LocaleConfig};
pub use feed::FeedPayload;
pub use filter::{CatalogEntry, FilterCatalog, FilterEntry, FilterRegistry, FilterState};
