//! Human readable durations with singular/plural unit labels.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Unit of a [`Duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
    /// Days.
    Days,
}

impl TimeUnit {
    /// All units, smallest first.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Seconds, Self::Minutes, Self::Hours, Self::Days]
    }

    /// Get the string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
        }
    }
}

/// Error returned when parsing an unknown unit name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown time unit '{0}'")]
pub struct ParseTimeUnitError(String);

impl FromStr for TimeUnit {
    type Err = ParseTimeUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "second" | "seconds" => Ok(Self::Seconds),
            "m" | "min" | "minute" | "minutes" => Ok(Self::Minutes),
            "h" | "hour" | "hours" => Ok(Self::Hours),
            "d" | "day" | "days" => Ok(Self::Days),
            _ => Err(ParseTimeUnitError(s.to_string())),
        }
    }
}

/// A signed amount of a single time unit.
///
/// No normalization happens across units: 90 seconds stays 90 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duration {
    amount: i64,
    unit: TimeUnit,
}

impl Duration {
    /// Creates a duration.
    #[must_use]
    pub const fn new(amount: i64, unit: TimeUnit) -> Self {
        Self { amount, unit }
    }

    /// The signed amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// The unit.
    #[must_use]
    pub const fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Whether the unit label takes its singular form.
    #[must_use]
    pub const fn is_singular(&self) -> bool {
        self.amount.unsigned_abs() == 1
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&DurationFormatter::english().format(*self))
    }
}

/// Source of the labels printed after the amount.
pub trait UnitLabels {
    /// Label for `unit`, singular or plural.
    fn label(&self, unit: TimeUnit, singular: bool) -> Cow<'_, str>;
}

impl<T: UnitLabels + ?Sized> UnitLabels for &T {
    fn label(&self, unit: TimeUnit, singular: bool) -> Cow<'_, str> {
        (**self).label(unit, singular)
    }
}

/// Built-in English labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishUnitLabels;

impl UnitLabels for EnglishUnitLabels {
    fn label(&self, unit: TimeUnit, singular: bool) -> Cow<'_, str> {
        let label = match (unit, singular) {
            (TimeUnit::Seconds, true) => "second",
            (TimeUnit::Minutes, true) => "minute",
            (TimeUnit::Hours, true) => "hour",
            (TimeUnit::Days, true) => "day",
            (unit, false) => unit.as_str(),
        };
        Cow::Borrowed(label)
    }
}

/// Formats durations as `"<amount> <label>"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationFormatter<L = EnglishUnitLabels> {
    labels: L,
}

impl DurationFormatter<EnglishUnitLabels> {
    /// Formatter using the built-in English labels.
    #[must_use]
    pub const fn english() -> Self {
        Self {
            labels: EnglishUnitLabels,
        }
    }
}

impl<L: UnitLabels> DurationFormatter<L> {
    /// Formatter drawing labels from `labels`.
    pub const fn new(labels: L) -> Self {
        Self { labels }
    }

    /// Formats `duration`. The sign stays on the number; only the label
    /// looks at the magnitude.
    pub fn format(&self, duration: Duration) -> String {
        let label = self.labels.label(duration.unit(), duration.is_singular());
        format!("{} {}", duration.amount(), label)
    }
}
