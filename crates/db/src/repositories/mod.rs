//! Repository layer.
//!
//! Repositories own their data and implement the lookup traits declared in
//! `vehicles_core`.

pub mod vehicle_repo;

pub use vehicle_repo::VehicleMapRepo;
