/// Identifier of a vehicle within the collection.
pub type VehicleId = i64;
