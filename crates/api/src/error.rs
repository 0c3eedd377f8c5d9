//! HTTP error envelope.
//!
//! Every failure leaves the API as `{"message": "..."}` with the status the
//! underlying [`AppError`] maps to.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dompet_core::ledger::LedgerError;
use dompet_shared::AppError;
use serde_json::json;
use tracing::{error, warn};

/// Handler result alias.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned by handlers and extractor rejections.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::BadRequest(format!(
            "Data tidak valid: {}",
            rejection.body_text()
        )))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(AppError::BadRequest(format!(
            "Data tidak valid: {}",
            rejection.body_text()
        )))
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        Self(AppError::BadRequest("ID tidak valid".to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.is_server_error() {
            error!(code = self.0.error_code(), error = %self.0, "Request failed");
        } else {
            warn!(code = self.0.error_code(), error = %self.0, "Request rejected");
        }

        let body = json!({ "message": self.0.public_message() });
        (status, Json(body)).into_response()
    }
}
