use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::vehicle::{VehicleRepository, VehicleService};

use crate::openapi::ApiDoc;

pub mod vehicles;

/// Shared handler state; the repository is chosen by the caller.
#[derive(Clone)]
pub struct AppState {
    pub vehicles: Arc<VehicleService<dyn VehicleRepository>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn VehicleRepository>) -> Self {
        Self { vehicles: Arc::new(VehicleService::new(repo)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let vehicle_routes = Router::new()
        .route(
            "/vehicles",
            get(vehicles::list_vehicles)
                .post(vehicles::create_vehicle)
                .put(vehicles::update_vehicle),
        )
        .route(
            "/vehicles/:id",
            get(vehicles::get_vehicle).delete(vehicles::delete_vehicle),
        );

    public
        .merge(vehicle_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
