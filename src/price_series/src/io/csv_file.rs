//! CSV ingestion for daily and intraday price files.
//!
//! The first column is the row key (`timestamp`, `time`, `date`, ...). Only the
//! four price columns are read; volume, adjusted close and the like are
//! ignored. Vendor files are typically newest-first, so rows are re-ordered
//! into a [`TimeSeries`] before they reach the selector.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use tracing::{debug, info};

use crate::models::{bar::Bar, series::TimeSeries};

/// Errors raised while reading a price file.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum LoadError {
    /// The file could not be opened.
    #[snafu(display("Failed to open {}: {source}", path.display()))]
    Open {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// A row is missing a price column or has a non-numeric value.
    #[snafu(display("Malformed row {row} in {}: {source}", path.display()))]
    Row {
        path: PathBuf,
        row: usize,
        source: csv::Error,
        backtrace: Backtrace,
    },

    /// The row key is not a recognised date or date-time.
    #[snafu(display("Unparseable timestamp {value:?} at row {row} in {}", path.display()))]
    Timestamp {
        path: PathBuf,
        row: usize,
        value: String,
        backtrace: Backtrace,
    },
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(
        alias = "time",
        alias = "date",
        alias = "datetime",
        alias = "Timestamp",
        alias = "Time",
        alias = "Date"
    )]
    timestamp: String,
    #[serde(alias = "Open")]
    open: f64,
    #[serde(alias = "High")]
    high: f64,
    #[serde(alias = "Low")]
    low: f64,
    #[serde(alias = "Close")]
    close: f64,
}

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parses a row key; bare dates map to midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Reads a price file from disk.
pub fn load_series(path: impl AsRef<Path>) -> Result<TimeSeries, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).context(OpenSnafu { path })?;
    let series = read_series(file, path)?;
    info!(
        path = %path.display(),
        rows = series.len(),
        first = ?series.first_timestamp(),
        last = ?series.last_timestamp(),
        "loaded price series"
    );
    Ok(series)
}

/// Reads price rows from any reader; `path` is only used in error messages.
pub fn read_series<R: Read>(reader: R, path: &Path) -> Result<TimeSeries, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut bars = Vec::new();
    for (i, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = i + 1;
        let record = result.context(RowSnafu { path, row })?;
        let timestamp = parse_timestamp(&record.timestamp).context(TimestampSnafu {
            path,
            row,
            value: record.timestamp.as_str(),
        })?;
        bars.push(Bar {
            timestamp,
            open: record.open,
            high: record.high,
            low: record.low,
            close: record.close,
        });
    }

    debug!(path = %path.display(), rows = bars.len(), "parsed csv rows");
    Ok(TimeSeries::new(bars))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAILY: &str = "\
timestamp,open,high,low,close,adjusted_close,volume,dividend_amount,split_coefficient
2020-12-31,134.08,134.74,131.72,132.69,131.88,99116586,0.0000,1.0
2020-12-30,135.58,135.99,133.40,133.72,132.90,96452124,0.0000,1.0
2020-12-29,138.05,138.79,134.34,134.87,134.05,121047324,0.0000,1.0
";

    const INTRADAY: &str = "\
time,open,high,low,close,volume
2020-12-31 20:00:00,132.65,132.70,132.60,132.62,12000
2020-12-31 19:45:00,132.60,132.68,132.55,132.65,9800
";

    #[test]
    fn reads_daily_file_ascending() {
        let series = read_series(DAILY.as_bytes(), Path::new("AAPL_daily.csv")).unwrap();
        assert_eq!(series.len(), 3);
        let closes: Vec<f64> = series.bars().iter().map(|b| b.close).collect();
        assert_eq!(closes, vec![134.87, 133.72, 132.69]);
        assert_eq!(series.last_timestamp(), parse_timestamp("2020-12-31"));
    }

    #[test]
    fn reads_intraday_time_column() {
        let series = read_series(INTRADAY.as_bytes(), Path::new("AAPL_intraday.csv")).unwrap();
        assert_eq!(series.first_timestamp(), parse_timestamp("2020-12-31 19:45:00"));
        assert_eq!(series.bars()[1].close, 132.62);
    }

    #[test]
    fn bad_timestamp_reports_row() {
        let text = "date,open,high,low,close\n2020-01-02,1,1,1,1\nyesterday,1,1,1,1\n";
        let err = read_series(text.as_bytes(), Path::new("x.csv")).unwrap_err();
        match err {
            LoadError::Timestamp { row, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(value, "yesterday");
            }
            other => panic!("expected Timestamp error, got {other}"),
        }
    }

    #[test]
    fn missing_price_column_is_row_error() {
        let text = "date,open,high,low\n2020-01-02,1,1,1\n";
        let err = read_series(text.as_bytes(), Path::new("x.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Row { row: 1, .. }));
    }

    #[test]
    fn parse_timestamp_formats() {
        let midnight = NaiveDate::from_ymd_opt(2021, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2021-06-01"), Some(midnight));
        assert_eq!(parse_timestamp("2021-06-01T00:00:00"), Some(midnight));
        assert_eq!(parse_timestamp("2021-06-01 00:00"), Some(midnight));
        assert_eq!(parse_timestamp("06/01/2021"), None);
    }
}
