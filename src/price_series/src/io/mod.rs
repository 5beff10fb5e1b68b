//! File ingestion.

pub mod csv_file;

pub use csv_file::{LoadError, load_series, read_series};
