//! Canonical in-memory representation of a single price bar (OHLC).
//!
//! Both the daily and the intraday files are ingested into this shape, so the
//! selector never needs to know which vendor layout a series came from.

use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::SelectionError;

/// A single price bar for a given timestamp.
///
/// Daily bars carry a midnight timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// The timestamp for this bar, the ordering key of a series.
    pub timestamp: NaiveDateTime,

    /// Opening price.
    pub open: f64,

    /// Highest price during the bar interval.
    pub high: f64,

    /// Lowest price during the bar interval.
    pub low: f64,

    /// Closing price.
    pub close: f64,
}

impl Bar {
    /// Returns the value of `field` for this bar.
    pub const fn value(&self, field: PriceField) -> f64 {
        match field {
            PriceField::Open => self.open,
            PriceField::High => self.high,
            PriceField::Low => self.low,
            PriceField::Close => self.close,
        }
    }
}

/// One of the four price columns of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceField {
    Open,
    High,
    Low,
    Close,
}

impl PriceField {
    /// All fields in column order.
    pub const ALL: [PriceField; 4] = [Self::Open, Self::High, Self::Low, Self::Close];

    /// Lowercase column name (`"open"`, `"high"`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
        }
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceField {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| SelectionError::InvalidField(s.to_string()))
    }
}
