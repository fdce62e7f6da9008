//! Business rules over the vehicle repository: filtering, aggregation and
//! the not-found classification handed to the HTTP layer.

use crate::error::ServiceError;
use crate::repository::VehicleRepository;
use crate::vehicle::{SearchQuery, VehicleMap};

/// Vehicle queries and aggregates exposed to handlers.
pub trait VehicleService: Send + Sync {
    /// The entire collection. An empty collection is not an error.
    fn find_all(&self) -> Result<VehicleMap, ServiceError>;

    fn find_by_color_and_year(&self, color: &str, year: i32) -> Result<VehicleMap, ServiceError>;

    fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> Result<VehicleMap, ServiceError>;

    /// Mean `max_speed` over every vehicle of `brand`.
    fn average_max_speed_by_brand(&self, brand: &str) -> Result<f64, ServiceError>;

    /// Mean `capacity` over every vehicle of `brand`, truncated toward zero.
    fn average_capacity_by_brand(&self, brand: &str) -> Result<i32, ServiceError>;

    /// Vehicles within the query's weight bounds when `active`, otherwise the
    /// whole collection with the bounds ignored.
    fn search_by_weight_range(
        &self,
        query: SearchQuery,
        active: bool,
    ) -> Result<VehicleMap, ServiceError>;
}

/// Default [`VehicleService`] backed by an owned repository.
pub struct VehicleDefault<R> {
    repository: R,
}

impl<R: VehicleRepository> VehicleDefault<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Fetch every vehicle of `brand`, failing with
    /// [`ServiceError::NoVehicles`] when there is nothing to aggregate.
    fn vehicles_of_brand(&self, brand: &str) -> Result<VehicleMap, ServiceError> {
        let vehicles = self.repository.find_by_brand(brand)?;
        if vehicles.is_empty() {
            tracing::debug!(brand, "No vehicles for brand");
            return Err(ServiceError::NoVehicles);
        }
        Ok(vehicles)
    }
}

impl<R: VehicleRepository> VehicleService for VehicleDefault<R> {
    fn find_all(&self) -> Result<VehicleMap, ServiceError> {
        Ok(self.repository.find_all()?)
    }

    fn find_by_color_and_year(&self, color: &str, year: i32) -> Result<VehicleMap, ServiceError> {
        Ok(self.repository.find_by_color_and_year(color, year)?)
    }

    fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> Result<VehicleMap, ServiceError> {
        Ok(self
            .repository
            .find_by_brand_and_year_range(brand, start_year, end_year)?)
    }

    fn average_max_speed_by_brand(&self, brand: &str) -> Result<f64, ServiceError> {
        let vehicles = self.vehicles_of_brand(brand)?;
        let total: f64 = vehicles.values().map(|v| v.max_speed).sum();

        Ok(total / vehicles.len() as f64)
    }

    fn average_capacity_by_brand(&self, brand: &str) -> Result<i32, ServiceError> {
        let vehicles = self.vehicles_of_brand(brand)?;
        let total: i64 = vehicles.values().map(|v| i64::from(v.capacity)).sum();

        // The mean of i32 values always fits back into an i32.
        Ok((total / vehicles.len() as i64) as i32)
    }

    fn search_by_weight_range(
        &self,
        query: SearchQuery,
        active: bool,
    ) -> Result<VehicleMap, ServiceError> {
        if !active {
            return Ok(self.repository.find_all()?);
        }

        let vehicles = self
            .repository
            .find_by_weight_range(query.from_weight, query.to_weight)?;
        if vehicles.is_empty() {
            tracing::debug!(
                from_weight = query.from_weight,
                to_weight = query.to_weight,
                "No vehicles within weight range",
            );
            return Err(ServiceError::NoVehicles);
        }
        Ok(vehicles)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
