//! Vehicle records and query value objects.
//!
//! Vehicles serialize as flat PascalCase objects (`Id`, `Brand`, ...,
//! `Height`, `Length`, `Width`), which is the shape clients of the HTTP API
//! receive.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::VehicleId;

/// The full in-memory collection, keyed by vehicle id.
///
/// Iteration order carries no meaning.
pub type VehicleMap = HashMap<VehicleId, Vehicle>;

/// Physical dimensions of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dimensions {
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

/// A single vehicle record. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vehicle {
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    pub fabrication_year: i32,
    /// Passenger count.
    pub capacity: i32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    #[serde(flatten)]
    pub dimensions: Dimensions,
}

/// Inclusive weight bounds for a range search.
///
/// Whether the bounds apply at all is decided by the caller (see
/// `VehicleService::search_by_weight_range`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchQuery {
    pub from_weight: f64,
    pub to_weight: f64,
}

impl SearchQuery {
    pub fn new(from_weight: f64, to_weight: f64) -> Self {
        Self {
            from_weight,
            to_weight,
        }
    }
}
