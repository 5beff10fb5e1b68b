#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use price_series::{Bar, SeriesRepository, SymbolSeries, TimeSeries};

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// Deterministic but non-monotonic price path.
pub fn price(i: i64) -> f64 {
    100.0 + ((i * 37) % 101) as f64 / 4.0
}

pub fn bar(timestamp: NaiveDateTime, close: f64) -> Bar {
    Bar {
        timestamp,
        open: close - 0.5,
        high: close + 1.25,
        low: close - 1.75,
        close,
    }
}

/// Daily bars for every calendar day of 2020.
pub fn daily_2020() -> TimeSeries {
    let start = at(2020, 1, 1, 0, 0);
    TimeSeries::new(
        (0..366)
            .map(|i| bar(start + Duration::days(i), price(i)))
            .collect(),
    )
}

/// 15-minute bars for the 30 days ending 2020-12-31 23:45.
pub fn intraday_december_2020() -> TimeSeries {
    let start = at(2020, 12, 2, 0, 0);
    TimeSeries::new(
        (0..30 * 96)
            .map(|i| bar(start + Duration::minutes(15 * i), price(i * 7 + 3)))
            .collect(),
    )
}

pub fn aapl_repository() -> SeriesRepository {
    SeriesRepository::from_entries([(
        "AAPL".to_string(),
        SymbolSeries {
            name: "Apple".to_string(),
            coarse: daily_2020(),
            fine: intraday_december_2020(),
        },
    )])
}

/// Renders bars the way the vendor files are laid out: newest first.
pub fn to_csv(series: &TimeSeries, key: &str, with_time: bool) -> String {
    let mut out = format!("{key},open,high,low,close,volume\n");
    for b in series.bars().iter().rev() {
        let ts = if with_time {
            b.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
        } else {
            b.timestamp.format("%Y-%m-%d").to_string()
        };
        out.push_str(&format!(
            "{ts},{},{},{},{},1000\n",
            b.open, b.high, b.low, b.close
        ));
    }
    out
}
