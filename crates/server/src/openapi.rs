use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct VehicleDoc { pub id: i32, pub year: i32, pub make: String, pub model: String }

/// Vehicle payload; `id` is ignored on create and required on update.
#[derive(ToSchema)]
pub struct VehicleInputDoc {
    pub id: Option<i32>,
    pub year: i32,
    pub make: Option<String>,
    pub model: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::vehicles::create_vehicle,
        crate::routes::vehicles::list_vehicles,
        crate::routes::vehicles::get_vehicle,
        crate::routes::vehicles::update_vehicle,
        crate::routes::vehicles::delete_vehicle,
    ),
    components(
        schemas(
            HealthResponse,
            VehicleDoc,
            VehicleInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "vehicles")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_vehicle_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for p in ["/health", "/vehicles", "/vehicles/{id}"] {
            assert!(paths.iter().any(|k| k.as_str() == p), "missing {p}");
        }
    }
}
