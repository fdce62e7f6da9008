//! Domain model and business rules for the vehicles API.
//!
//! This crate has no internal dependencies: the repository is a trait here
//! and its in-memory implementation lives in `vehicles-db`.

pub mod error;
pub mod repository;
pub mod service;
pub mod types;
pub mod vehicle;

pub use error::{RepositoryError, ServiceError};
pub use repository::VehicleRepository;
pub use service::{VehicleDefault, VehicleService};
pub use types::VehicleId;
pub use vehicle::{Dimensions, SearchQuery, Vehicle, VehicleMap};
