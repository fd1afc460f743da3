// src/config.rs

//! Configuration loading utilities.
//!
//! This module provides convenience functions for loading the application
//! configuration and locale tables from files.

use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::{Config, LocaleConfig};

/// Load configuration from a TOML file.
///
/// Falls back to defaults if loading fails.
pub fn load_config(path: &Path) -> Config {
    Config::load_or_default(path)
}

/// Load locale tables from a TOML file.
///
/// Falls back to defaults if loading fails.
pub fn load_locale(path: &Path) -> LocaleConfig {
    LocaleConfig::load_or_default(path)
}

/// Load and validate both configuration and locale tables.
pub fn load_all(base_path: &Path) -> Result<(Config, LocaleConfig)> {
    let config = load_config(&base_path.join("data/config.toml"));
    config
        .validate()
        .map_err(|e| AppError::config(format!("Invalid config: {e}")))?;

    let locale = load_locale(&base_path.join("data/locale.toml"));
    locale
        .validate()
        .map_err(|e| AppError::config(format!("Invalid locale tables: {e}")))?;

    Ok((config, locale))
}
