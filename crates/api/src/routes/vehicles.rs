//! Route definitions for vehicle queries, mounted at `/vehicles`.

use axum::routing::get;
use axum::Router;

use crate::handlers::vehicles;
use crate::state::AppState;

/// Vehicle routes mounted at `/vehicles`.
///
/// ```text
/// GET /                                              -> list_vehicles
/// GET /color/{color}/year/{year}                     -> find_by_color_and_year
/// GET /brand/{brand}/between/{start_year}/{end_year} -> find_by_brand_and_year_range
/// GET /average_speed/brand/{brand}                   -> average_max_speed_by_brand
/// GET /average_capacity/brand/{brand}                -> average_capacity_by_brand
/// GET /weight?weight_min=&weight_max=                -> search_by_weight_range
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vehicles::list_vehicles))
        .route(
            "/color/{color}/year/{year}",
            get(vehicles::find_by_color_and_year),
        )
        .route(
            "/brand/{brand}/between/{start_year}/{end_year}",
            get(vehicles::find_by_brand_and_year_range),
        )
        .route(
            "/average_speed/brand/{brand}",
            get(vehicles::average_max_speed_by_brand),
        )
        .route(
            "/average_capacity/brand/{brand}",
            get(vehicles::average_capacity_by_brand),
        )
        .route("/weight", get(vehicles::search_by_weight_range))
}
