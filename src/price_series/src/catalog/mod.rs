//! Catalog subsystem.
//!
//! Describes which symbols are served and where their daily and intraday
//! files live. See [`crate::catalog::config`] for the TOML model and helpers.

pub mod config;

pub use config::{
    CatalogError, NormalizationReport, SymbolCatalog, load_catalog_path, load_catalog_str,
    normalize_catalog,
};
