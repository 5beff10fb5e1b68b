//! Time-windowed selection over a [`SeriesRepository`].
//!
//! For a symbol, a [`Window`] and a [`PriceField`] the selector
//!
//! 1. picks the intraday series for windows up to 30 days and the daily series
//!    otherwise,
//! 2. keeps the bars strictly newer than `latest - window`, where `latest` is
//!    the chosen series' own last timestamp (the whole series for
//!    [`Window::All`]),
//! 3. summarizes the field's min and max over what is left.
//!
//! Selection is a pure function of the repository and its arguments. The
//! result borrows from the repository; nothing is copied or cached.

use serde::Serialize;
use tracing::debug;

use crate::{
    errors::SelectionError,
    models::{
        bar::{Bar, PriceField},
        series::Granularity,
        window::Window,
    },
    repository::SeriesRepository,
};

/// Min and max of one field over a selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSummary {
    pub field: PriceField,
    pub min: f64,
    pub max: f64,
}

impl FieldSummary {
    /// `None` when `bars` is empty.
    pub fn from_bars(bars: &[Bar], field: PriceField) -> Option<Self> {
        let first = bars.first()?.value(field);
        let (min, max) = bars.iter().fold((first, first), |(lo, hi), bar| {
            let v = bar.value(field);
            (lo.min(v), hi.max(v))
        });
        Some(Self { field, min, max })
    }

    /// Highest value as currency, e.g. `$134.74`.
    pub fn highest(&self) -> String {
        format_currency(self.max)
    }

    /// Lowest value as currency.
    pub fn lowest(&self) -> String {
        format_currency(self.min)
    }
}

/// Formats a price with a dollar sign and two decimals.
pub fn format_currency(value: f64) -> String {
    format!("${value:.2}")
}

/// Result of one selection: the trailing bars and the field summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection<'r> {
    pub symbol: String,
    /// Display name of the symbol.
    pub name: &'r str,
    pub window: Window,
    pub granularity: Granularity,
    pub summary: FieldSummary,
    /// Trailing sub-range of the chosen series, ascending.
    pub bars: &'r [Bar],
}

/// Chooses and trims series held by a repository.
#[derive(Debug, Clone, Copy)]
pub struct WindowSelector<'r> {
    repo: &'r SeriesRepository,
}

impl<'r> WindowSelector<'r> {
    pub const fn new(repo: &'r SeriesRepository) -> Self {
        Self { repo }
    }

    /// Selects the trailing `window` of `symbol` and summarizes `field`.
    ///
    /// # Errors
    /// - [`SelectionError::UnknownSymbol`] if the symbol is not loaded
    /// - [`SelectionError::EmptyWindow`] if no bar survives trimming
    pub fn select(
        &self,
        symbol: &str,
        window: Window,
        field: PriceField,
    ) -> Result<Selection<'r>, SelectionError> {
        let entry = self.repo.get(symbol)?;
        let granularity = window.granularity();
        let series = entry.series(granularity);

        let bars = match window.lookback() {
            Some(lookback) => series.trailing(lookback),
            None => series.bars(),
        };

        let summary =
            FieldSummary::from_bars(bars, field).ok_or_else(|| SelectionError::EmptyWindow {
                symbol: symbol.to_string(),
                window: window.to_string(),
                granularity: granularity.as_str(),
            })?;

        debug!(
            symbol,
            %window,
            granularity = granularity.as_str(),
            %field,
            rows = bars.len(),
            "selected window"
        );

        Ok(Selection {
            symbol: symbol.to_string(),
            name: &entry.name,
            window,
            granularity,
            summary,
            bars,
        })
    }

    /// Same as [`select`](Self::select) but validates raw UI inputs first.
    ///
    /// Checks run in order symbol, window ordinal, field name.
    pub fn select_raw(
        &self,
        symbol: &str,
        window_ordinal: u8,
        field: &str,
    ) -> Result<Selection<'r>, SelectionError> {
        self.repo.get(symbol)?;
        let window = Window::from_ordinal(window_ordinal)?;
        let field = field.parse::<PriceField>()?;
        self.select(symbol, window, field)
    }
}
