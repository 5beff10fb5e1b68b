//! A time-ordered collection of bars for one symbol at one granularity.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::bar::Bar;

/// Sampling density of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    /// Long history, one bar per trading day.
    #[serde(rename = "daily")]
    Coarse,
    /// Short recent history, several bars per trading day.
    #[serde(rename = "intraday")]
    Fine,
}

impl Granularity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Coarse => "daily",
            Self::Fine => "intraday",
        }
    }
}

/// An immutable series of bars, unique and ascending by timestamp.
///
/// The ordering is established once in [`TimeSeries::new`]; everything that
/// reads a series relies on it and never re-sorts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TimeSeries {
    bars: Vec<Bar>,
}

impl TimeSeries {
    /// Builds a series from bars in any order.
    ///
    /// Bars are sorted ascending by timestamp; for duplicated timestamps the
    /// first bar in input order is kept.
    pub fn new(mut bars: Vec<Bar>) -> Self {
        // stable sort so dedup keeps the first occurrence
        bars.sort_by_key(|bar| bar.timestamp);
        let before = bars.len();
        bars.dedup_by_key(|bar| bar.timestamp);
        if bars.len() != before {
            tracing::debug!(dropped = before - bars.len(), "dropped duplicate timestamps");
        }
        Self { bars }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn first_timestamp(&self) -> Option<NaiveDateTime> {
        self.bars.first().map(|bar| bar.timestamp)
    }

    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        self.bars.last().map(|bar| bar.timestamp)
    }

    /// Time between the first and the last bar.
    pub fn span(&self) -> Option<Duration> {
        Some(self.last_timestamp()? - self.first_timestamp()?)
    }

    /// Bars strictly newer than `latest - lookback`, where `latest` is the
    /// timestamp of the series' own last bar.
    ///
    /// Returns an empty slice for an empty series.
    pub fn trailing(&self, lookback: Duration) -> &[Bar] {
        let Some(latest) = self.last_timestamp() else {
            return &[];
        };
        let cutoff = latest - lookback;
        let start = self.bars.partition_point(|bar| bar.timestamp <= cutoff);
        &self.bars[start..]
    }
}

impl From<Vec<Bar>> for TimeSeries {
    fn from(bars: Vec<Bar>) -> Self {
        Self::new(bars)
    }
}
