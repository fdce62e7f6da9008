//! Handlers for vehicle queries and per-brand aggregates.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::query::{parse_param, WeightRangeParams};
use crate::response::DataResponse;
use crate::state::AppState;

const VEHICLES_FOUND: &str = "vehicles found";

/// GET /api/v1/vehicles
///
/// The whole collection.
pub async fn list_vehicles(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let vehicles = state.vehicles.find_all()?;

    Ok(Json(DataResponse::new(vehicles, VEHICLES_FOUND)))
}

/// GET /api/v1/vehicles/color/{color}/year/{year}
pub async fn find_by_color_and_year(
    State(state): State<AppState>,
    Path((color, year)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let year: i32 = parse_param("year", &year)?;

    let vehicles = state.vehicles.find_by_color_and_year(&color, year)?;

    tracing::debug!(%color, year, count = vehicles.len(), "Vehicles found by color and year");

    Ok(Json(DataResponse::new(vehicles, VEHICLES_FOUND)))
}

/// GET /api/v1/vehicles/brand/{brand}/between/{start_year}/{end_year}
///
/// Both years are inclusive.
pub async fn find_by_brand_and_year_range(
    State(state): State<AppState>,
    Path((brand, start_year, end_year)): Path<(String, String, String)>,
) -> AppResult<impl IntoResponse> {
    let start_year: i32 = parse_param("start_year", &start_year)?;
    let end_year: i32 = parse_param("end_year", &end_year)?;

    let vehicles = state
        .vehicles
        .find_by_brand_and_year_range(&brand, start_year, end_year)?;

    tracing::debug!(
        %brand,
        start_year,
        end_year,
        count = vehicles.len(),
        "Vehicles found by brand and year range",
    );

    Ok(Json(DataResponse::new(vehicles, VEHICLES_FOUND)))
}

/// GET /api/v1/vehicles/average_speed/brand/{brand}
pub async fn average_max_speed_by_brand(
    State(state): State<AppState>,
    Path(brand): Path<String>,
) -> AppResult<impl IntoResponse> {
    let average = state.vehicles.average_max_speed_by_brand(&brand)?;

    Ok(Json(DataResponse::new(average, "average max speed found")))
}

/// GET /api/v1/vehicles/average_capacity/brand/{brand}
pub async fn average_capacity_by_brand(
    State(state): State<AppState>,
    Path(brand): Path<String>,
) -> AppResult<impl IntoResponse> {
    let average = state.vehicles.average_capacity_by_brand(&brand)?;

    Ok(Json(DataResponse::new(average, "average capacity found")))
}

/// GET /api/v1/vehicles/weight?weight_min=&weight_max=
///
/// Without both bounds the filter is off and the whole collection is returned.
pub async fn search_by_weight_range(
    State(state): State<AppState>,
    Query(params): Query<WeightRangeParams>,
) -> AppResult<impl IntoResponse> {
    let (query, active) = params.to_search_query()?;

    let vehicles = state.vehicles.search_by_weight_range(query, active)?;

    tracing::debug!(
        active,
        from_weight = query.from_weight,
        to_weight = query.to_weight,
        count = vehicles.len(),
        "Vehicles found by weight range",
    );

    Ok(Json(DataResponse::new(vehicles, VEHICLES_FOUND)))
}
