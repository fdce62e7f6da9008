use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vehicles_core::ServiceError;

/// Message returned when the service reports an empty aggregate or range.
pub const NO_VEHICLES_MESSAGE: &str = "vehicles not found";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`ServiceError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent
/// `{"status": ..., "message": ...}` JSON error bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `vehicles_core`.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// A request parameter could not be converted to its expected type.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // The two not-found kinds keep distinct messages.
            AppError::Service(ServiceError::Repository(err)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            AppError::Service(ServiceError::NoVehicles) => {
                (StatusCode::NOT_FOUND, NO_VEHICLES_MESSAGE.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = json!({
            "status": status.canonical_reason().unwrap_or("Error"),
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
