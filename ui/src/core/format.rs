//! Formatting helpers for presenting metrics.

use num_format::{Locale, ToFormattedString};
use serde::Deserialize;
use time::{macros::format_description, Date, OffsetDateTime};

use crate::core::error::{DashboardError, Result};

/// Number separators, resolved from a locale tag such as `"en"` or `"de"`.
/// The default is English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct NumberLocale(Locale);

impl NumberLocale {
    pub const EN: Self = Self(Locale::en);

    pub fn from_tag(tag: &str) -> Result<Self> {
        Locale::from_name(tag)
            .map(Self)
            .map_err(|err| DashboardError::InvalidConfig(format!("locale `{tag}`: {err}")))
    }

    pub fn locale(&self) -> &Locale {
        &self.0
    }

    pub fn tag(&self) -> &'static str {
        self.0.name()
    }

    pub fn decimal_separator(&self) -> &'static str {
        self.0.decimal()
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::EN
    }
}

impl TryFrom<String> for NumberLocale {
    type Error = DashboardError;

    fn try_from(tag: String) -> Result<Self> {
        Self::from_tag(&tag)
    }
}

/// Whether a period-over-period change reads as growth or decline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaDirection {
    Up,
    Down,
}

impl DeltaDirection {
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Integer with the locale's thousands grouping, e.g. `12,345`.
pub fn format_int(value: u64, locale: &NumberLocale) -> String {
    value.to_formatted_string(locale.locale())
}

/// Fixed-precision number without grouping.
pub fn format_number(value: f64, decimals: usize, locale: &NumberLocale) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let raw = format!("{value:.decimals$}");
    match locale.decimal_separator() {
        "." => raw,
        separator => raw.replace('.', separator),
    }
}

/// Percentage with two decimals, e.g. `3.42%`. `value` is already scaled to 0 to 100.
pub fn format_percent(value: f64, locale: &NumberLocale) -> String {
    format!("{}%", format_number(value, 2, locale))
}

/// Signed delta badge text, e.g. `▲ 12.3%` or `▼ 4.0%`.
///
/// Changes smaller than a hundredth of a percent snap to zero and count as
/// growth so rounding noise never shows a downward arrow.
pub fn format_delta(change_pct: f64, locale: &NumberLocale) -> (String, DeltaDirection) {
    let rounded = if change_pct.abs() < 0.01 { 0.0 } else { change_pct };
    let direction = if rounded >= 0.0 {
        DeltaDirection::Up
    } else {
        DeltaDirection::Down
    };
    let text = format!(
        "{} {}%",
        direction.arrow(),
        format_number(rounded.abs(), 1, locale)
    );
    (text, direction)
}

/// ISO calendar date, `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| "—".to_string())
}

/// Minute-precision wall-clock stamp, `YYYY-MM-DD HH:MM` (24-hour).
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(&format_description!("[year]-[month]-[day] [hour]:[minute]"))
        .unwrap_or_else(|_| "—".to_string())
}
