//! Lookback duration sent to the quote provider.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Requested lookback window label.
///
/// A closed set; anything outside it normalizes to [`Self::OneDay`] at the
/// configuration boundary. Controls only the outbound `interval` query
/// parameter, not the fixed sample window used for normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookbackDuration {
    /// One day.
    #[default]
    OneDay,
    /// One week.
    OneWeek,
    /// One month.
    OneMonth,
    /// Three months.
    ThreeMonths,
    /// Six months.
    SixMonths,
    /// One year.
    OneYear,
    /// Two years.
    TwoYears,
    /// Five years.
    FiveYears,
    /// Maximum available history.
    Max,
}

impl LookbackDuration {
    /// Parse a duration label, normalizing unknown values to `1d`.
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "1w" => Self::OneWeek,
            "1m" => Self::OneMonth,
            "3m" => Self::ThreeMonths,
            "6m" => Self::SixMonths,
            "1y" => Self::OneYear,
            "2y" => Self::TwoYears,
            "5y" => Self::FiveYears,
            "max" => Self::Max,
            _ => Self::OneDay,
        }
    }

    /// The label used as the provider's `interval` query parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1m",
            Self::ThreeMonths => "3m",
            Self::SixMonths => "6m",
            Self::OneYear => "1y",
            Self::TwoYears => "2y",
            Self::FiveYears => "5y",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for LookbackDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LookbackDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LookbackDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_str_or_default(&raw))
    }
}
