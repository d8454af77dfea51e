use crate::transport::http::error::ApiError;
use crate::transport::http::handlers::common::{json_body, location, ResourceId};
use crate::transport::http::mapping::map_all;
use crate::transport::http::types::{AppState, RegionDto, RegionRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub const COLLECTION: &str = "/Regions";

#[utoipa::path(
    get,
    path = "/Regions",
    responses(
        (status = 200, description = "All regions", body = [RegionDto]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_regions_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RegionDto>>, ApiError> {
    let regions = state.catalog.regions.list().await?;
    Ok(Json(map_all(regions)))
}

#[utoipa::path(
    get,
    path = "/Regions/{id}",
    params(("id" = Uuid, Path, description = "Region id")),
    responses(
        (status = 200, description = "The region", body = RegionDto),
        (status = 404, description = "No region with this id")
    )
)]
pub async fn get_region_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<RegionDto>, ApiError> {
    let region = state.catalog.regions.get(id).await?;
    Ok(Json(region.into()))
}

#[utoipa::path(
    post,
    path = "/Regions",
    request_body = RegionRequest,
    responses(
        (status = 201, description = "Region created; Location points at it", body = RegionDto),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse)
    )
)]
pub async fn create_region_handler(
    State(state): State<AppState>,
    request: Result<Json<RegionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = json_body(request)?;
    let region = state.catalog.regions.create(request.into()).await?;
    let headers = location(COLLECTION, region.id);
    Ok((StatusCode::CREATED, headers, Json(RegionDto::from(region))))
}

#[utoipa::path(
    put,
    path = "/Regions/{id}",
    params(("id" = Uuid, Path, description = "Region id")),
    request_body = RegionRequest,
    responses(
        (status = 200, description = "Region replaced", body = RegionDto),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 404, description = "No region with this id")
    )
)]
pub async fn update_region_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    request: Result<Json<RegionRequest>, JsonRejection>,
) -> Result<Json<RegionDto>, ApiError> {
    let request = json_body(request)?;
    let region = state.catalog.regions.update(id, request.into()).await?;
    Ok(Json(region.into()))
}

#[utoipa::path(
    delete,
    path = "/Regions/{id}",
    params(("id" = Uuid, Path, description = "Region id")),
    responses(
        (status = 200, description = "Region removed; body is its final state", body = RegionDto),
        (status = 404, description = "No region with this id"),
        (status = 409, description = "Still referenced by walks (restrict policy)", body = ValidationErrorResponse)
    )
)]
pub async fn delete_region_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<RegionDto>, ApiError> {
    let region = state.catalog.regions.delete(id).await?;
    Ok(Json(region.into()))
}
