//! Symbol catalog: which stocks the dashboard serves and where their files live.
//!
//! The catalog is a small TOML document:
//!
//! ```toml
//! data_dir = "stocks_data"
//!
//! [symbols]
//! AAPL = "Apple"
//! NVDA = "Nvidia"
//! ```
//!
//! Key behaviors:
//! - Symbols are trimmed and uppercased, names trimmed; order is preserved.
//! - Empty symbols or names, duplicates after normalization and an empty
//!   symbol table are errors.
//! - A relative `data_dir` is resolved against the catalog file's directory
//!   by [`load_catalog_path`].
//!
//! Without a file, [`SymbolCatalog::default`] is the four stocks the
//! dashboard ships with.

use std::{
    mem,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use snafu::{Backtrace, ResultExt, Snafu, ensure};

/// File suffix of the long-history daily series.
pub const DEFAULT_COARSE_SUFFIX: &str = "_TIME_SERIES_DAILY_ADJUSTED.csv";
/// File suffix of the recent intraday series.
pub const DEFAULT_FINE_SUFFIX: &str = "_TIME_SERIES_INTRADAY_EXTENDED.csv";

/// Errors raised while reading or normalizing a catalog.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CatalogError {
    #[snafu(display("Failed to read catalog file {}: {source}", path.display()))]
    Read {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Failed to parse catalog TOML: {source}"))]
    Parse {
        source: toml::de::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Symbol cannot be empty after trimming"))]
    EmptySymbol { backtrace: Backtrace },

    #[snafu(display("Display name for {symbol} cannot be empty"))]
    EmptyName { symbol: String, backtrace: Backtrace },

    #[snafu(display("Duplicate symbol after normalization: {symbol}"))]
    DuplicateSymbol { symbol: String, backtrace: Backtrace },

    #[snafu(display("Catalog declares no symbols"))]
    NoSymbols { backtrace: Backtrace },
}

/// Known symbols plus the file layout of their price series.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SymbolCatalog {
    /// Directory holding the CSV files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Appended to the symbol to name the daily file.
    #[serde(default = "default_coarse_suffix")]
    pub coarse_suffix: String,
    /// Appended to the symbol to name the intraday file.
    #[serde(default = "default_fine_suffix")]
    pub fine_suffix: String,
    /// Symbol -> display name, in dropdown order.
    pub symbols: IndexMap<String, String>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("stocks_data")
}

fn default_coarse_suffix() -> String {
    DEFAULT_COARSE_SUFFIX.to_string()
}

fn default_fine_suffix() -> String {
    DEFAULT_FINE_SUFFIX.to_string()
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        let symbols = [
            ("AAPL", "Apple"),
            ("NVDA", "Nvidia"),
            ("TSLA", "Tesla"),
            ("IBM", "IBM"),
        ]
        .into_iter()
        .map(|(s, n)| (s.to_string(), n.to_string()))
        .collect();
        Self {
            data_dir: default_data_dir(),
            coarse_suffix: default_coarse_suffix(),
            fine_suffix: default_fine_suffix(),
            symbols,
        }
    }
}

impl SymbolCatalog {
    /// Path of the daily file for `symbol`.
    pub fn coarse_path(&self, symbol: &str) -> PathBuf {
        self.data_dir.join(format!("{symbol}{}", self.coarse_suffix))
    }

    /// Path of the intraday file for `symbol`.
    pub fn fine_path(&self, symbol: &str) -> PathBuf {
        self.data_dir.join(format!("{symbol}{}", self.fine_suffix))
    }
}

/// Summary of changes performed during normalization.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NormalizationReport {
    /// Number of symbol keys that changed when uppercasing/trimming.
    pub symbols_renamed: usize,
}

/// Normalize a catalog in place.
///
/// Errors:
/// - Empty symbol or display name after trimming
/// - Two symbols that normalize to the same key
/// - No symbols at all
pub fn normalize_catalog(cat: &mut SymbolCatalog) -> Result<NormalizationReport, CatalogError> {
    let mut report = NormalizationReport::default();
    let mut rebuilt = IndexMap::with_capacity(cat.symbols.len());

    for (raw_symbol, raw_name) in mem::take(&mut cat.symbols) {
        let symbol = raw_symbol.trim().to_uppercase();
        ensure!(!symbol.is_empty(), EmptySymbolSnafu);
        if symbol != raw_symbol {
            report.symbols_renamed += 1;
        }
        ensure!(
            !rebuilt.contains_key(&symbol),
            DuplicateSymbolSnafu { symbol }
        );

        let name = raw_name.trim().to_string();
        ensure!(!name.is_empty(), EmptyNameSnafu { symbol });
        rebuilt.insert(symbol, name);
    }
    ensure!(!rebuilt.is_empty(), NoSymbolsSnafu);

    cat.symbols = rebuilt;
    Ok(report)
}

/// Parse and normalize a catalog from a TOML string.
pub fn load_catalog_str(toml_str: &str) -> Result<SymbolCatalog, CatalogError> {
    let mut cat: SymbolCatalog = toml::from_str(toml_str).context(ParseSnafu)?;
    let report = normalize_catalog(&mut cat)?;
    tracing::debug!(?report, symbols = cat.symbols.len(), "normalized catalog");
    Ok(cat)
}

/// Read a catalog TOML file from disk, parse, and normalize it.
///
/// A relative `data_dir` is taken relative to the file's directory.
pub fn load_catalog_path(path: impl AsRef<Path>) -> Result<SymbolCatalog, CatalogError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).context(ReadSnafu { path })?;
    let mut cat = load_catalog_str(&text)?;
    if cat.data_dir.is_relative() {
        if let Some(parent) = path.parent() {
            cat.data_dir = parent.join(&cat.data_dir);
        }
    }
    Ok(cat)
}
