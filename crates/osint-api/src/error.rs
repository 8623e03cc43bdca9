//! HTTP mapping for request-terminating errors.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use osint_core::OsintError;
use osint_recon::ReconError;
use serde_json::json;
use tracing::{debug, error};

/// Error that ends a request with a single `{"error": ...}` body
#[derive(Debug)]
pub struct ApiError(pub OsintError);

impl From<OsintError> for ApiError {
    fn from(err: OsintError) -> Self {
        Self(err)
    }
}

impl From<ReconError> for ApiError {
    fn from(err: ReconError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(OsintError::InvalidBody(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_client_error() {
            debug!(error = %self.0, "request rejected");
        } else {
            error!(error = %self.0, "request failed");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
