use std::sync::Arc;

use vehicles_core::VehicleService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Vehicle queries and aggregates. Read-only after startup.
    pub vehicles: Arc<dyn VehicleService>,
    /// Size of the collection loaded at startup.
    pub vehicle_count: usize,
}
