//! Lookback windows offered by the dashboard slider.
//!
//! A [`Window`] is one of seven fixed, ordered choices. The ordinal is what the
//! UI sends; the day count is what trimming uses.
//!
//! ```
//! use price_series::models::window::Window;
//!
//! let w = Window::from_ordinal(1).unwrap();
//! assert_eq!(w, Window::SevenDays);
//! assert_eq!(w.days(), Some(7));
//! assert_eq!(w.to_string(), "7d");
//! ```

use std::{fmt, str::FromStr};

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::{errors::SelectionError, models::series::Granularity};

/// Trailing lookback duration, in slider order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Window {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "90d")]
    NinetyDays,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "5y")]
    FiveYears,
    /// The whole series, untrimmed.
    #[serde(rename = "all")]
    All,
}

impl Window {
    /// All windows, indexed by ordinal.
    pub const ALL: [Window; 7] = [
        Self::OneDay,
        Self::SevenDays,
        Self::ThirtyDays,
        Self::NinetyDays,
        Self::OneYear,
        Self::FiveYears,
        Self::All,
    ];

    /// Longest window the intraday series is assumed to cover.
    pub const FINE_COVERAGE: Window = Self::ThirtyDays;

    pub fn from_ordinal(ordinal: u8) -> Result<Self, SelectionError> {
        Self::ALL
            .get(usize::from(ordinal))
            .copied()
            .ok_or_else(|| SelectionError::InvalidWindow(ordinal.to_string()))
    }

    pub const fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Lookback in days, `None` for [`Window::All`].
    pub const fn days(&self) -> Option<i64> {
        match self {
            Self::OneDay => Some(1),
            Self::SevenDays => Some(7),
            Self::ThirtyDays => Some(30),
            Self::NinetyDays => Some(90),
            Self::OneYear => Some(365),
            Self::FiveYears => Some(365 * 5),
            Self::All => None,
        }
    }

    pub fn lookback(&self) -> Option<Duration> {
        self.days().map(Duration::days)
    }

    /// Series a window is served from: intraday up to 30 days, daily beyond.
    pub const fn granularity(&self) -> Granularity {
        if self.ordinal() <= Self::FINE_COVERAGE.ordinal() {
            Granularity::Fine
        } else {
            Granularity::Coarse
        }
    }

    /// Slider mark shown in the dashboard.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OneDay => "1 day",
            Self::SevenDays => "1 week",
            Self::ThirtyDays => "1 month",
            Self::NinetyDays => "3 months",
            Self::OneYear => "1 year",
            Self::FiveYears => "5 years",
            Self::All => "Max",
        }
    }
}

/// Short form used in query strings and the CLI (`"7d"`, `"1y"`, `"all"`).
impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::OneDay => "1d",
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
            Self::NinetyDays => "90d",
            Self::OneYear => "1y",
            Self::FiveYears => "5y",
            Self::All => "all",
        };
        f.write_str(s)
    }
}

/// Accepts either the short form or the ordinal (`"2"`).
impl FromStr for Window {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(ordinal) = s.parse::<u8>() {
            return Self::from_ordinal(ordinal);
        }
        Self::ALL
            .into_iter()
            .find(|w| w.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| SelectionError::InvalidWindow(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_round_trip() {
        for (i, w) in Window::ALL.iter().enumerate() {
            assert_eq!(usize::from(w.ordinal()), i);
            assert_eq!(Window::from_ordinal(i as u8).unwrap(), *w);
        }
    }

    #[test]
    fn ordinal_past_table_is_invalid() {
        match Window::from_ordinal(7) {
            Err(SelectionError::InvalidWindow(raw)) => assert_eq!(raw, "7"),
            other => panic!("expected InvalidWindow, got {other:?}"),
        }
    }

    #[test]
    fn thirty_days_is_last_fine_window() {
        assert_eq!(Window::ThirtyDays.granularity(), Granularity::Fine);
        assert_eq!(Window::NinetyDays.granularity(), Granularity::Coarse);
        assert_eq!(Window::All.granularity(), Granularity::Coarse);
    }

    #[test]
    fn parses_short_form_and_ordinal() {
        assert_eq!("1y".parse::<Window>().unwrap(), Window::OneYear);
        assert_eq!("ALL".parse::<Window>().unwrap(), Window::All);
        assert_eq!("3".parse::<Window>().unwrap(), Window::NinetyDays);
        assert!("2w".parse::<Window>().is_err());
    }
}
