//! HTTP surface of the stock dashboard.
//!
//! The router serves the dashboard page and a small JSON API over a
//! [`SeriesRepository`] that is loaded once and shared read-only.

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use price_series::SeriesRepository;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared state handed to every handler.
pub type AppState = Arc<SeriesRepository>;

/// Assemble the full application router.
pub fn app(repo: SeriesRepository) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(repo))
}
