// src/services/timefmt.rs

//! Pattern-token time formatting.
//!
//! Renders a millisecond timestamp under a fixed locale and UTC offset,
//! driven by single-character pattern tokens. Every token maps to a
//! (field, style) pair; tokens present in the pattern override the default
//! style for their field, then each token character is substituted with the
//! rendered part for its field. Unrecognized characters pass through
//! untouched.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, Timelike, Utc};

use crate::models::{FormatConfig, LocaleConfig};

/// A date/time field a pattern token can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Weekday,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Field {
    fn index(self) -> usize {
        match self {
            Field::Weekday => 0,
            Field::Year => 1,
            Field::Month => 2,
            Field::Day => 3,
            Field::Hour => 4,
            Field::Minute => 5,
            Field::Second => 6,
        }
    }
}

/// Rendering style for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Numeric,
    TwoDigit,
    Long,
    Short,
}

/// Default style per field, indexed by `Field::index`:
/// weekday:long, year:numeric, month:long, day:numeric,
/// hour/minute/second:2-digit.
const DEFAULT_STYLES: [Style; 7] = [
    Style::Long,
    Style::Numeric,
    Style::Long,
    Style::Numeric,
    Style::TwoDigit,
    Style::TwoDigit,
    Style::TwoDigit,
];

/// Fixed pattern-token lookup table.
fn token_style(token: char) -> Option<(Field, Style)> {
    match token {
        'Y' => Some((Field::Year, Style::Numeric)),
        'm' => Some((Field::Month, Style::TwoDigit)),
        'd' => Some((Field::Day, Style::TwoDigit)),
        'H' => Some((Field::Hour, Style::TwoDigit)),
        'i' => Some((Field::Minute, Style::TwoDigit)),
        'S' => Some((Field::Second, Style::TwoDigit)),
        'D' => Some((Field::Weekday, Style::Short)),
        'l' => Some((Field::Weekday, Style::Long)),
        'F' => Some((Field::Month, Style::Long)),
        'M' => Some((Field::Month, Style::Short)),
        _ => None,
    }
}

/// Locale-fixed timestamp formatter.
///
/// The offset and name tables are captured at construction; for a fixed
/// `(timestamp, pattern)` the output is byte-identical on every call.
#[derive(Debug, Clone)]
pub struct TimeFormatter {
    tables: LocaleConfig,
    offset: FixedOffset,
}

impl TimeFormatter {
    /// Create a formatter from the application configuration.
    pub fn new(format: &FormatConfig, locale: &LocaleConfig) -> Self {
        let offset = FixedOffset::east_opt(format.utc_offset_minutes * 60)
            .unwrap_or_else(|| Utc.fix());

        Self {
            tables: locale.clone(),
            offset,
        }
    }

    /// Format a millisecond timestamp according to a token pattern.
    ///
    /// # Example
    /// ```
    /// use stormboard::models::{FormatConfig, LocaleConfig};
    /// use stormboard::services::TimeFormatter;
    ///
    /// let tf = TimeFormatter::new(&FormatConfig::default(), &LocaleConfig::default());
    /// assert_eq!(tf.format(1662624030000, "H:i"), "11:00");
    /// ```
    pub fn format(&self, timestamp_ms: i64, pattern: &str) -> String {
        // Pass 1: tokens override the default style of their field.
        // A repeated or conflicting token keeps the last occurrence.
        let mut styles = DEFAULT_STYLES;
        for token in pattern.chars() {
            if let Some((field, style)) = token_style(token) {
                styles[field.index()] = style;
            }
        }

        let local = self.local_datetime(timestamp_ms);

        // Pass 2: substitute each token character with its field's part.
        let mut out = String::with_capacity(pattern.len() * 2);
        for token in pattern.chars() {
            match token_style(token) {
                Some((field, _)) => {
                    out.push_str(&self.part(&local, field, styles[field.index()]))
                }
                None => out.push(token),
            }
        }
        out
    }

    /// Calendar day of a millisecond timestamp at the fixed offset.
    pub fn civil_date(&self, timestamp_ms: i64) -> NaiveDate {
        self.local_datetime(timestamp_ms).date_naive()
    }

    fn local_datetime(&self, timestamp_ms: i64) -> DateTime<FixedOffset> {
        // Out-of-range timestamps clamp to the epoch; ordering elsewhere
        // still uses the raw value.
        DateTime::from_timestamp_millis(timestamp_ms)
            .unwrap_or(DateTime::UNIX_EPOCH)
            .with_timezone(&self.offset)
    }

    fn part(&self, local: &DateTime<FixedOffset>, field: Field, style: Style) -> String {
        match field {
            Field::Weekday => {
                let idx = local.weekday().num_days_from_monday() as usize;
                match style {
                    Style::Long => self.table_name(&self.tables.weekdays_long, idx),
                    Style::Short => self.table_name(&self.tables.weekdays_short, idx),
                    Style::Numeric | Style::TwoDigit => (idx + 1).to_string(),
                }
            }
            Field::Year => match style {
                Style::TwoDigit => format!("{:02}", local.year().rem_euclid(100)),
                _ => local.year().to_string(),
            },
            Field::Month => {
                let idx = local.month0() as usize;
                match style {
                    Style::Long => self.table_name(&self.tables.months_long, idx),
                    Style::Short => self.table_name(&self.tables.months_short, idx),
                    Style::Numeric => local.month().to_string(),
                    Style::TwoDigit => format!("{:02}", local.month()),
                }
            }
            Field::Day => Self::number(local.day(), style),
            Field::Hour => Self::number(local.hour(), style),
            Field::Minute => Self::number(local.minute(), style),
            Field::Second => Self::number(local.second(), style),
        }
    }

    fn number(value: u32, style: Style) -> String {
        match style {
            Style::TwoDigit => format!("{value:02}"),
            _ => value.to_string(),
        }
    }

    fn table_name(&self, table: &[String], idx: usize) -> String {
        table.get(idx).cloned().unwrap_or_default()
    }
}
