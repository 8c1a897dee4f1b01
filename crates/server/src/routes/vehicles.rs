use axum::{extract::{rejection::JsonRejection, Path, Query, State}, http::StatusCode, Json};
use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

use models::{Vehicle, VehicleInput};
use service::vehicle::VehicleFilter;

use super::AppState;
use crate::errors::ApiError;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Accepted for compatibility; does not narrow the result.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub id: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
}

/// `?year=` reads as an absent parameter, not as an unparsable number.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl From<ListQuery> for VehicleFilter {
    fn from(q: ListQuery) -> Self {
        VehicleFilter { year: q.year, make: q.make, model: q.model }
    }
}

#[utoipa::path(post, path = "/vehicles", tag = "vehicles", request_body = crate::openapi::VehicleInputDoc, responses((status = 201, description = "vehicle created", body = String), (status = 400, description = "Validation failed", body = String)))]
pub async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<VehicleInput>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(input) = payload?;
    state.vehicles.create(input).await?;
    Ok((StatusCode::CREATED, "vehicle created"))
}

#[utoipa::path(get, path = "/vehicles", tag = "vehicles", params(ListQuery), responses((status = 200, description = "Matching vehicles", body = [crate::openapi::VehicleDoc])))]
pub async fn list_vehicles(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<Vehicle>>, ApiError> {
    let filter = VehicleFilter::from(q);
    Ok(Json(state.vehicles.list(&filter).await?))
}

#[utoipa::path(get, path = "/vehicles/{id}", tag = "vehicles", params(("id" = i32, Path, description = "Vehicle id")), responses((status = 200, description = "The vehicle", body = crate::openapi::VehicleDoc), (status = 400, description = "Unknown id", body = String)))]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vehicle>, ApiError> {
    Ok(Json(state.vehicles.get(id).await?))
}

#[utoipa::path(put, path = "/vehicles", tag = "vehicles", request_body = crate::openapi::VehicleInputDoc, responses((status = 200, description = "vehicle updated", body = String), (status = 400, description = "Unknown id or validation failed", body = String)))]
pub async fn update_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<VehicleInput>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(input) = payload?;
    state.vehicles.update(input).await?;
    Ok((StatusCode::OK, "vehicle updated"))
}

#[utoipa::path(delete, path = "/vehicles/{id}", tag = "vehicles", params(("id" = i32, Path, description = "Vehicle id")), responses((status = 204, description = "vehicle deleted")))]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<(StatusCode, &'static str), ApiError> {
    state.vehicles.delete(id).await?;
    Ok((StatusCode::NO_CONTENT, "vehicle deleted"))
}
