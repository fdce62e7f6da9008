//! Predicate lookups over the vehicle collection.

use crate::error::RepositoryError;
use crate::vehicle::VehicleMap;

/// Read-only access to the vehicle collection.
///
/// Only [`find_by_color_and_year`](Self::find_by_color_and_year) and
/// [`find_by_brand_and_year_range`](Self::find_by_brand_and_year_range)
/// report [`RepositoryError::NotFound`] on an empty match. The other lookups
/// return an empty map and leave the decision to the service. The service's
/// error classification depends on this split, so implementations must keep
/// it.
pub trait VehicleRepository: Send + Sync {
    /// The entire collection.
    fn find_all(&self) -> Result<VehicleMap, RepositoryError>;

    /// Vehicles with exactly `color` (case-sensitive) built in `year`.
    fn find_by_color_and_year(&self, color: &str, year: i32)
        -> Result<VehicleMap, RepositoryError>;

    /// Vehicles of `brand` built within `start_year..=end_year`.
    fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> Result<VehicleMap, RepositoryError>;

    /// Vehicles of `brand`. Never fails on an empty match.
    fn find_by_brand(&self, brand: &str) -> Result<VehicleMap, RepositoryError>;

    /// Vehicles weighing within `from_weight..=to_weight`. Never fails on an
    /// empty match.
    fn find_by_weight_range(
        &self,
        from_weight: f64,
        to_weight: f64,
    ) -> Result<VehicleMap, RepositoryError>;
}
