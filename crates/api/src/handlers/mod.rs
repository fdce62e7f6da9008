//! Request handlers.
//!
//! Handlers convert path and query parameters into typed arguments, call the
//! vehicle service held in [`AppState`](crate::state::AppState), and map
//! errors via [`AppError`](crate::error::AppError). They never inspect
//! result emptiness themselves.

pub mod vehicles;
