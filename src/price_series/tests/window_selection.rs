mod common;

use chrono::Duration;
use common::{aapl_repository, at};
use price_series::{Granularity, PriceField, SelectionError, Window, WindowSelector};

#[test]
fn seven_day_close_from_intraday() {
    let repo = aapl_repository();
    let selector = WindowSelector::new(&repo);

    let sel = selector
        .select("AAPL", Window::SevenDays, PriceField::Close)
        .unwrap();

    assert_eq!(sel.granularity, Granularity::Fine);
    // last bar 12-31 23:45, so everything after 12-24 23:45 stays
    assert_eq!(sel.bars.len(), 7 * 96);
    assert_eq!(sel.bars.first().unwrap().timestamp, at(2020, 12, 25, 0, 0));
    assert_eq!(sel.bars.last().unwrap().timestamp, at(2020, 12, 31, 23, 45));

    let fine = &repo.get("AAPL").unwrap().fine;
    let cutoff = fine.last_timestamp().unwrap() - Duration::days(7);
    let expected: Vec<f64> = fine
        .bars()
        .iter()
        .filter(|b| b.timestamp > cutoff)
        .map(|b| b.close)
        .collect();
    let min = expected.iter().copied().fold(f64::INFINITY, f64::min);
    let max = expected.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(sel.summary.min, min);
    assert_eq!(sel.summary.max, max);
}

#[test]
fn windows_switch_series_after_thirty_days() {
    let repo = aapl_repository();
    let selector = WindowSelector::new(&repo);

    for window in Window::ALL {
        let sel = selector.select("AAPL", window, PriceField::Open).unwrap();
        let expected = if window.ordinal() <= 2 {
            Granularity::Fine
        } else {
            Granularity::Coarse
        };
        assert_eq!(sel.granularity, expected, "window {window}");
    }
}

#[test]
fn thirty_days_covers_whole_intraday_file() {
    let repo = aapl_repository();
    let sel = WindowSelector::new(&repo)
        .select("AAPL", Window::ThirtyDays, PriceField::High)
        .unwrap();
    // first bar sits exactly on the cutoff plus 15 minutes
    assert_eq!(sel.bars.len(), 30 * 96);
}

#[test]
fn five_years_and_all_agree_on_one_year_of_data() {
    let repo = aapl_repository();
    let selector = WindowSelector::new(&repo);
    let five = selector
        .select("AAPL", Window::FiveYears, PriceField::Low)
        .unwrap();
    let all = selector.select("AAPL", Window::All, PriceField::Low).unwrap();
    assert_eq!(five.bars, all.bars);
    assert_eq!(all.bars.len(), 366);
}

#[test]
fn one_year_excludes_first_day() {
    let repo = aapl_repository();
    let sel = WindowSelector::new(&repo)
        .select("AAPL", Window::OneYear, PriceField::Close)
        .unwrap();
    // 2020 is a leap year: 2020-12-31 minus 365 days is 2020-01-01
    assert_eq!(sel.bars.len(), 365);
    assert_eq!(sel.bars[0].timestamp, at(2020, 1, 2, 0, 0));
}

#[test]
fn errors_surface_unchanged() {
    let repo = aapl_repository();
    let selector = WindowSelector::new(&repo);

    assert_eq!(
        selector
            .select("GOOG", Window::All, PriceField::Close)
            .unwrap_err(),
        SelectionError::UnknownSymbol("GOOG".into())
    );
    assert_eq!(
        selector.select_raw("AAPL", 7, "close").unwrap_err(),
        SelectionError::InvalidWindow("7".into())
    );
    assert_eq!(
        selector.select_raw("AAPL", 0, "adj_close").unwrap_err(),
        SelectionError::InvalidField("adj_close".into())
    );
}

#[test]
fn sparse_intraday_gives_empty_window() {
    use price_series::{SeriesRepository, SymbolSeries, TimeSeries};

    // a single intraday bar: the one-day window still holds it
    let one = TimeSeries::new(vec![common::bar(at(2020, 12, 31, 16, 0), 10.0)]);
    let repo = SeriesRepository::from_entries([(
        "IBM".to_string(),
        SymbolSeries {
            name: "IBM".into(),
            coarse: TimeSeries::default(),
            fine: one,
        },
    )]);
    let selector = WindowSelector::new(&repo);
    assert!(selector.select("IBM", Window::OneDay, PriceField::Close).is_ok());

    // no daily data at all: long windows have nothing to show
    match selector.select("IBM", Window::OneYear, PriceField::Close) {
        Err(SelectionError::EmptyWindow { symbol, window, granularity }) => {
            assert_eq!(symbol, "IBM");
            assert_eq!(window, "1y");
            assert_eq!(granularity, "daily");
        }
        other => panic!("expected EmptyWindow, got {other:?}"),
    }
}
