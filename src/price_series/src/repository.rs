//! Read-only store of the daily and intraday series of every known symbol.
//!
//! Built once at startup and shared by reference afterwards; lookups hand out
//! borrows of the same immutable series on every call.

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::{
    catalog::SymbolCatalog,
    errors::SelectionError,
    io::{LoadError, load_series},
    models::{
        series::{Granularity, TimeSeries},
        window::Window,
    },
};

/// Catalog entry: the two alternative views of one stock's price history.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSeries {
    /// Company name shown as the chart title.
    pub name: String,
    /// Long history at daily resolution.
    pub coarse: TimeSeries,
    /// Recent history at intraday resolution.
    pub fine: TimeSeries,
}

impl SymbolSeries {
    pub const fn series(&self, granularity: Granularity) -> &TimeSeries {
        match granularity {
            Granularity::Coarse => &self.coarse,
            Granularity::Fine => &self.fine,
        }
    }
}

/// Symbol -> series lookup over a fixed set of symbols.
#[derive(Debug, Clone, Default)]
pub struct SeriesRepository {
    entries: IndexMap<String, SymbolSeries>,
}

impl SeriesRepository {
    /// Builds a repository from in-memory series, keeping iteration order.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, SymbolSeries)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Loads both files of every catalog symbol.
    ///
    /// Fails on the first file that cannot be read. Intraday series covering
    /// less than the 30-day window are logged, since requests up to that
    /// window are still served from them.
    pub fn load(catalog: &SymbolCatalog) -> Result<Self, LoadError> {
        let mut entries = IndexMap::with_capacity(catalog.symbols.len());
        for (symbol, name) in &catalog.symbols {
            let coarse = load_series(catalog.coarse_path(symbol))?;
            let fine = load_series(catalog.fine_path(symbol))?;
            warn_on_short_fine_coverage(symbol, &fine);
            entries.insert(
                symbol.clone(),
                SymbolSeries {
                    name: name.clone(),
                    coarse,
                    fine,
                },
            );
        }
        info!(symbols = entries.len(), data_dir = %catalog.data_dir.display(), "series repository loaded");
        Ok(Self { entries })
    }

    pub fn get(&self, symbol: &str) -> Result<&SymbolSeries, SelectionError> {
        self.entries
            .get(symbol)
            .ok_or_else(|| SelectionError::UnknownSymbol(symbol.to_string()))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// `(symbol, display name)` pairs in catalog order.
    pub fn symbols(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(symbol, entry)| (symbol.as_str(), entry.name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn warn_on_short_fine_coverage(symbol: &str, fine: &TimeSeries) {
    let Some(assumed) = Window::FINE_COVERAGE.lookback() else {
        return;
    };
    match fine.span() {
        Some(span) if span >= assumed => {}
        span => warn!(
            symbol,
            covered_days = span.map(|s| s.num_days()),
            assumed_days = assumed.num_days(),
            "intraday series is shorter than the windows served from it"
        ),
    }
}
