use thiserror::Error;

/// Errors returned by series lookup and window selection.
///
/// All of them describe bad caller input or an unusable data shape; none are
/// transient, so callers report them instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The symbol is not part of the loaded catalog.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// The window selector is outside the fixed window table.
    #[error("invalid window: {0} (expected an ordinal 0-6 or one of 1d, 7d, 30d, 90d, 1y, 5y, all)")]
    InvalidWindow(String),

    /// The field name is not one of open, high, low, close.
    #[error("invalid price field: {0} (expected open, high, low or close)")]
    InvalidField(String),

    /// Trimming left no bars to summarize.
    #[error("no {granularity} bars for {symbol} in the last {window} window")]
    EmptyWindow {
        symbol: String,
        window: String,
        granularity: &'static str,
    },
}
