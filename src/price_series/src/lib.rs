//! Time-windowed selection over per-symbol daily and intraday price series.
//!
//! The crate is organized bottom-up:
//! - [`models`]: bars, series, windows and price fields
//! - [`io`] and [`catalog`]: one-time loading of CSV files described by a TOML catalog
//! - [`repository`]: the read-only symbol -> series store
//! - [`selector`]: window selection and min/max summaries

pub mod catalog;
pub mod errors;
pub mod io;
pub mod models;
pub mod repository;
pub mod selector;

pub use errors::SelectionError;
pub use models::{
    bar::{Bar, PriceField},
    series::{Granularity, TimeSeries},
    window::Window,
};
pub use repository::{SeriesRepository, SymbolSeries};
pub use selector::{FieldSummary, Selection, WindowSelector, format_currency};
