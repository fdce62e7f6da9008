//! In-memory repository over the loaded vehicle collection.
//!
//! Every lookup is a linear scan of the owned map. Only the color/year and
//! brand/year-range lookups treat an empty match as
//! [`RepositoryError::NotFound`]; the others return an empty map.

use vehicles_core::{RepositoryError, Vehicle, VehicleMap, VehicleRepository};

/// Provides predicate lookups over an owned vehicle collection.
#[derive(Debug, Clone, Default)]
pub struct VehicleMapRepo {
    db: VehicleMap,
}

impl VehicleMapRepo {
    pub fn new(db: VehicleMap) -> Self {
        Self { db }
    }

    /// Number of vehicles held.
    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    fn filter(&self, predicate: impl Fn(&Vehicle) -> bool) -> VehicleMap {
        self.db
            .iter()
            .filter(|(_, v)| predicate(v))
            .map(|(id, v)| (*id, v.clone()))
            .collect()
    }
}

/// Turn an empty match into [`RepositoryError::NotFound`].
fn non_empty(vehicles: VehicleMap) -> Result<VehicleMap, RepositoryError> {
    if vehicles.is_empty() {
        return Err(RepositoryError::NotFound);
    }
    Ok(vehicles)
}

impl VehicleRepository for VehicleMapRepo {
    fn find_all(&self) -> Result<VehicleMap, RepositoryError> {
        Ok(self.db.clone())
    }

    fn find_by_color_and_year(
        &self,
        color: &str,
        year: i32,
    ) -> Result<VehicleMap, RepositoryError> {
        non_empty(self.filter(|v| v.color == color && v.fabrication_year == year))
    }

    fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> Result<VehicleMap, RepositoryError> {
        non_empty(self.filter(|v| {
            v.brand == brand && (start_year..=end_year).contains(&v.fabrication_year)
        }))
    }

    fn find_by_brand(&self, brand: &str) -> Result<VehicleMap, RepositoryError> {
        Ok(self.filter(|v| v.brand == brand))
    }

    fn find_by_weight_range(
        &self,
        from_weight: f64,
        to_weight: f64,
    ) -> Result<VehicleMap, RepositoryError> {
        Ok(self.filter(|v| v.weight >= from_weight && v.weight <= to_weight))
    }
}
