pub mod health;
pub mod vehicles;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /vehicles                                          list, lookups, aggregates
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/vehicles", vehicles::router())
}
