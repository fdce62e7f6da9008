//! Startup loading of the vehicle dataset.
//!
//! The dataset is a JSON array of [`VehicleRecord`]s. It is read once when
//! the process starts; nothing writes it back.

use std::path::Path;

use vehicles_core::{Vehicle, VehicleId, VehicleMap};

use crate::models::vehicle::VehicleRecord;

/// Errors raised while loading the dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("Failed to read vehicles file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid vehicles file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate vehicle id {0}")]
    DuplicateId(VehicleId),
}

/// Read and parse the dataset at `path`.
pub fn load_vehicles(path: impl AsRef<Path>) -> Result<VehicleMap, LoaderError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let vehicles = parse_vehicles(&contents)?;

    tracing::info!(path = %path.display(), count = vehicles.len(), "Loaded vehicles");

    Ok(vehicles)
}

/// Parse a dataset already held in memory.
///
/// Ids must be unique across the array.
pub fn parse_vehicles(contents: &str) -> Result<VehicleMap, LoaderError> {
    let records: Vec<VehicleRecord> = serde_json::from_str(contents)?;

    let mut vehicles = VehicleMap::with_capacity(records.len());
    for record in records {
        let vehicle = Vehicle::from(record);
        let id = vehicle.id;
        if vehicles.insert(id, vehicle).is_some() {
            return Err(LoaderError::DuplicateId(id));
        }
    }

    Ok(vehicles)
}
