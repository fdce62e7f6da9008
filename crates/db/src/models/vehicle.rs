//! Vehicle records as stored in the dataset file.
//!
//! The file uses snake_case keys and a few different names from the domain
//! model (`year` for the fabrication year, `passengers` for capacity, flat
//! dimensions). [`VehicleRecord`] absorbs those differences.

use serde::Deserialize;
use vehicles_core::{Dimensions, Vehicle, VehicleId};

/// One entry of the dataset JSON array.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleRecord {
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    pub year: i32,
    pub passengers: i32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

impl From<VehicleRecord> for Vehicle {
    fn from(record: VehicleRecord) -> Self {
        Vehicle {
            id: record.id,
            brand: record.brand,
            model: record.model,
            registration: record.registration,
            color: record.color,
            fabrication_year: record.year,
            capacity: record.passengers,
            max_speed: record.max_speed,
            fuel_type: record.fuel_type,
            transmission: record.transmission,
            weight: record.weight,
            dimensions: Dimensions {
                height: record.height,
                length: record.length,
                width: record.width,
            },
        }
    }
}
