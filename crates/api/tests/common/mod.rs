#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use vehicles_api::config::ServerConfig;
use vehicles_api::router::build_app_router;
use vehicles_api::state::AppState;
use vehicles_core::{
    Dimensions, SearchQuery, ServiceError, Vehicle, VehicleDefault, VehicleMap, VehicleService,
};
use vehicles_db::repositories::VehicleMapRepo;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        vehicles_file: PathBuf::from("unused.json"),
    }
}

/// Build the full application router around `service`, reporting an empty
/// collection on `/health`.
pub fn build_test_app(service: Arc<dyn VehicleService>) -> Router {
    build_test_app_with_count(service, 0)
}

/// Build the full application router around `service`.
///
/// Uses [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app_with_count(
    service: Arc<dyn VehicleService>,
    vehicle_count: usize,
) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        vehicles: service,
        vehicle_count,
    };
    build_app_router(state, &config)
}

/// App backed by the real service and repository over [`fixture_vehicles`].
pub fn seeded_app() -> Router {
    let repo = VehicleMapRepo::new(fixture_vehicles());
    let count = repo.len();
    build_test_app_with_count(Arc::new(VehicleDefault::new(repo)), count)
}

/// Service double whose every operation panics.
pub struct PanickingService;

impl VehicleService for PanickingService {
    fn find_all(&self) -> Result<VehicleMap, ServiceError> {
        panic!("find_all exploded");
    }

    fn find_by_color_and_year(
        &self,
        _color: &str,
        _year: i32,
    ) -> Result<VehicleMap, ServiceError> {
        panic!("find_by_color_and_year exploded");
    }

    fn find_by_brand_and_year_range(
        &self,
        _brand: &str,
        _start_year: i32,
        _end_year: i32,
    ) -> Result<VehicleMap, ServiceError> {
        panic!("find_by_brand_and_year_range exploded");
    }

    fn average_max_speed_by_brand(&self, _brand: &str) -> Result<f64, ServiceError> {
        panic!("average_max_speed_by_brand exploded");
    }

    fn average_capacity_by_brand(&self, _brand: &str) -> Result<i32, ServiceError> {
        panic!("average_capacity_by_brand exploded");
    }

    fn search_by_weight_range(
        &self,
        _query: SearchQuery,
        _active: bool,
    ) -> Result<VehicleMap, ServiceError> {
        panic!("search_by_weight_range exploded");
    }
}

#[allow(clippy::too_many_arguments)]
pub fn vehicle(
    id: i64,
    brand: &str,
    model: &str,
    registration: &str,
    color: &str,
    year: i32,
    capacity: i32,
    max_speed: f64,
    weight: f64,
    dimensions: (f64, f64, f64),
) -> Vehicle {
    Vehicle {
        id,
        brand: brand.into(),
        model: model.into(),
        registration: registration.into(),
        color: color.into(),
        fabrication_year: year,
        capacity,
        max_speed,
        fuel_type: "gas".into(),
        transmission: "manual".into(),
        weight,
        dimensions: Dimensions {
            height: dimensions.0,
            length: dimensions.1,
            width: dimensions.2,
        },
    }
}

/// The Land Rover Discovery (id 25, Orange, 1995).
pub fn discovery() -> Vehicle {
    Vehicle {
        fuel_type: "diesel".into(),
        ..vehicle(
            25,
            "Land Rover",
            "Discovery",
            "03178",
            "Orange",
            1995,
            4,
            175.0,
            293.77,
            (47.17, 0.0, 198.33),
        )
    }
}

/// Small collection: two Chevrolets (ids 11, 14), a Ford of the same vintage
/// (16), the Discovery (25) and a Fiat (40).
pub fn fixture_vehicles() -> VehicleMap {
    [
        vehicle(
            11,
            "Chevrolet",
            "G-Series 2500",
            "9292",
            "Mauv",
            1996,
            3,
            239.0,
            152.87,
            (50.84, 0.0, 216.53),
        ),
        Vehicle {
            transmission: "automatic".into(),
            ..vehicle(
                14,
                "Chevrolet",
                "Suburban 2500",
                "051",
                "Pink",
                1997,
                5,
                173.0,
                65.95,
                (40.51, 0.0, 135.28),
            )
        },
        vehicle(
            16,
            "Ford",
            "F-250",
            "48120",
            "Silver",
            1996,
            3,
            160.0,
            900.0,
            (60.2, 0.0, 220.4),
        ),
        discovery(),
        vehicle(
            40,
            "Fiat",
            "Uno",
            "73355",
            "Green",
            2004,
            5,
            150.0,
            820.0,
            (56.8, 145.6, 61.5),
        ),
    ]
    .into_iter()
    .map(|v| (v.id, v))
    .collect()
}

/// Service double that returns canned results and records every call.
pub struct StubService {
    pub vehicles: Result<VehicleMap, ServiceError>,
    pub average_speed: Result<f64, ServiceError>,
    pub average_capacity: Result<i32, ServiceError>,
    calls: Mutex<Vec<String>>,
}

impl StubService {
    pub fn returning_vehicles(vehicles: Result<VehicleMap, ServiceError>) -> Self {
        Self {
            vehicles,
            average_speed: Err(ServiceError::NoVehicles),
            average_capacity: Err(ServiceError::NoVehicles),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_average_speed(mut self, average: Result<f64, ServiceError>) -> Self {
        self.average_speed = average;
        self
    }

    pub fn with_average_capacity(mut self, average: Result<i32, ServiceError>) -> Self {
        self.average_capacity = average;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl VehicleService for StubService {
    fn find_all(&self) -> Result<VehicleMap, ServiceError> {
        self.record("find_all".into());
        self.vehicles.clone()
    }

    fn find_by_color_and_year(&self, color: &str, year: i32) -> Result<VehicleMap, ServiceError> {
        self.record(format!("find_by_color_and_year({color}, {year})"));
        self.vehicles.clone()
    }

    fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> Result<VehicleMap, ServiceError> {
        self.record(format!(
            "find_by_brand_and_year_range({brand}, {start_year}, {end_year})"
        ));
        self.vehicles.clone()
    }

    fn average_max_speed_by_brand(&self, brand: &str) -> Result<f64, ServiceError> {
        self.record(format!("average_max_speed_by_brand({brand})"));
        self.average_speed.clone()
    }

    fn average_capacity_by_brand(&self, brand: &str) -> Result<i32, ServiceError> {
        self.record(format!("average_capacity_by_brand({brand})"));
        self.average_capacity.clone()
    }

    fn search_by_weight_range(
        &self,
        query: SearchQuery,
        active: bool,
    ) -> Result<VehicleMap, ServiceError> {
        self.record(format!(
            "search_by_weight_range({}, {}, {active})",
            query.from_weight, query.to_weight
        ));
        self.vehicles.clone()
    }
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
