use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use price_series::{Bar, Granularity, PriceField, Window, WindowSelector};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::AppState;
use crate::error::ApiError;

const INDEX_HTML: &str = include_str!("../assets/index.html");

// ── Query params ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SelectionQuery {
    symbol: String,
    #[serde(default = "default_window")]
    window: u8,
    #[serde(default = "default_field")]
    field: String,
}

fn default_window() -> u8 {
    Window::ThirtyDays.ordinal()
}

fn default_field() -> String {
    PriceField::Close.as_str().to_string()
}

// ── Responses ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SymbolEntry {
    pub symbol: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct WindowEntry {
    pub ordinal: u8,
    pub key: String,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub symbol: String,
    pub name: String,
    pub window: Window,
    pub granularity: Granularity,
    pub field: PriceField,
    /// Currency-formatted maximum, e.g. `$134.74`.
    pub highest: String,
    /// Currency-formatted minimum.
    pub lowest: String,
    pub min: f64,
    pub max: f64,
    pub bars: Vec<Bar>,
}

// ── Route definitions ────────────────────────────────────────────────────

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/symbols", get(api_symbols))
        .route("/api/windows", get(api_windows))
        .route("/api/selection", get(api_selection))
}

// ── Handlers ─────────────────────────────────────────────────────────────

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn api_symbols(State(repo): State<AppState>) -> Json<Vec<SymbolEntry>> {
    let symbols = repo
        .symbols()
        .map(|(symbol, name)| SymbolEntry {
            symbol: symbol.to_string(),
            name: name.to_string(),
        })
        .collect();
    Json(symbols)
}

async fn api_windows() -> Json<Vec<WindowEntry>> {
    let windows = Window::ALL
        .iter()
        .map(|w| WindowEntry {
            ordinal: w.ordinal(),
            key: w.to_string(),
            label: w.label(),
        })
        .collect();
    Json(windows)
}

async fn api_selection(
    State(repo): State<AppState>,
    Query(q): Query<SelectionQuery>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let selection = WindowSelector::new(&repo).select_raw(&q.symbol, q.window, &q.field)?;
    let summary = selection.summary;

    Ok(Json(SelectionResponse {
        symbol: selection.symbol,
        name: selection.name.to_string(),
        window: selection.window,
        granularity: selection.granularity,
        field: summary.field,
        highest: summary.highest(),
        lowest: summary.lowest(),
        min: summary.min,
        max: summary.max,
        bars: selection.bars.to_vec(),
    }))
}
