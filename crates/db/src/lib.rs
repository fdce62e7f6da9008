pub mod loader;
pub mod models;
pub mod repositories;

use std::path::Path;

use crate::loader::LoaderError;
use crate::repositories::VehicleMapRepo;

/// Load the dataset at `path` into a ready-to-query repository.
pub fn open_repository(path: impl AsRef<Path>) -> Result<VehicleMapRepo, LoaderError> {
    loader::load_vehicles(path).map(VehicleMapRepo::new)
}
