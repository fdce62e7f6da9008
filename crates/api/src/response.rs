//! Shared response envelope for API handlers.
//!
//! Successful responses use a `{ "data": ..., "message": ... }` envelope.
//! Use [`DataResponse`] instead of ad-hoc `serde_json::json!` bodies.

use serde::Serialize;

/// Standard `{ "data": T, "message": "..." }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::new(vehicles, "vehicles found")))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
    pub message: &'static str,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T, message: &'static str) -> Self {
        Self { data, message }
    }
}
