use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use price_series::SelectionError;
use serde_json::json;
use thiserror::Error;

/// Error type for API responses.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub SelectionError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            SelectionError::UnknownSymbol(_) => StatusCode::NOT_FOUND,
            SelectionError::InvalidWindow(_) | SelectionError::InvalidField(_) => {
                StatusCode::BAD_REQUEST
            }
            SelectionError::EmptyWindow { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "selection request rejected");
        let body = json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
