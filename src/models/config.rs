// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Time formatting settings
    #[serde(default)]
    pub format: FormatConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.format.locale.trim().is_empty() {
            return Err(AppError::validation("format.locale is empty"));
        }
        // UTC offsets beyond ±14 hours do not exist
        if self.format.utc_offset_minutes.abs() > 14 * 60 {
            return Err(AppError::validation(
                "format.utc_offset_minutes out of range",
            ));
        }
        Ok(())
    }
}

/// Time formatting settings.
///
/// The locale and offset are fixed for the whole system: the formatter and
/// the date-separator logic both read them from here, never from the
/// environment, so output is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Locale token the name tables belong to
    #[serde(default = "defaults::locale")]
    pub locale: String,

    /// Fixed UTC offset in minutes for calendar-day and display rendering
    #[serde(default = "defaults::utc_offset_minutes")]
    pub utc_offset_minutes: i32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            locale: defaults::locale(),
            utc_offset_minutes: defaults::utc_offset_minutes(),
        }
    }
}

/// Localized date/time name tables.
///
/// Month names are in the form used inside a date ("8 сентября"), matching
/// what the fixed locale renders for a day-month part list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Full month names, January first
    #[serde(default = "defaults::months_long")]
    pub months_long: Vec<String>,

    /// Abbreviated month names, January first
    #[serde(default = "defaults::months_short")]
    pub months_short: Vec<String>,

    /// Full weekday names, Monday first
    #[serde(default = "defaults::weekdays_long")]
    pub weekdays_long: Vec<String>,

    /// Abbreviated weekday names, Monday first
    #[serde(default = "defaults::weekdays_short")]
    pub weekdays_short: Vec<String>,
}

impl LocaleConfig {
    /// Load locale tables from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load locale tables or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Locale load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate table lengths.
    pub fn validate(&self) -> Result<()> {
        if self.months_long.len() != 12 {
            return Err(AppError::validation("months_long must have 12 entries"));
        }
        if self.months_short.len() != 12 {
            return Err(AppError::validation("months_short must have 12 entries"));
        }
        if self.weekdays_long.len() != 7 {
            return Err(AppError::validation("weekdays_long must have 7 entries"));
        }
        if self.weekdays_short.len() != 7 {
            return Err(AppError::validation("weekdays_short must have 7 entries"));
        }
        Ok(())
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            months_long: defaults::months_long(),
            months_short: defaults::months_short(),
            weekdays_long: defaults::weekdays_long(),
            weekdays_short: defaults::weekdays_short(),
        }
    }
}

/// Default configuration values.
mod defaults {
    pub fn locale() -> String {
        "ru".to_string()
    }

    // Moscow time, matching the feed's reference locale
    pub fn utc_offset_minutes() -> i32 {
        180
    }

    fn own(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    pub fn months_long() -> Vec<String> {
        own(&[
            "января",
            "февраля",
            "марта",
            "апреля",
            "мая",
            "июня",
            "июля",
            "августа",
            "сентября",
            "октября",
            "ноября",
            "декабря",
        ])
    }

    pub fn months_short() -> Vec<String> {
        own(&[
            "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.",
            "нояб.", "дек.",
        ])
    }

    pub fn weekdays_long() -> Vec<String> {
        own(&[
            "понедельник",
            "вторник",
            "среда",
            "четверг",
            "пятница",
            "суббота",
            "воскресенье",
        ])
    }

    pub fn weekdays_short() -> Vec<String> {
        own(&["пн", "вт", "ср", "чт", "пт", "сб", "вс"])
    }
}
