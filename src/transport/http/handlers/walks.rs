use crate::transport::http::error::ApiError;
use crate::transport::http::handlers::common::{json_body, location, ResourceId};
use crate::transport::http::mapping::map_all;
use crate::transport::http::types::{AppState, WalkDto, WalkRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub const COLLECTION: &str = "/Walks";

#[utoipa::path(
    get,
    path = "/Walks",
    responses(
        (status = 200, description = "All walks", body = [WalkDto]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_walks_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<WalkDto>>, ApiError> {
    let walks = state.catalog.walks.list().await?;
    Ok(Json(map_all(walks)))
}

#[utoipa::path(
    get,
    path = "/Walks/{id}",
    params(("id" = Uuid, Path, description = "Walk id")),
    responses(
        (status = 200, description = "The walk", body = WalkDto),
        (status = 404, description = "No walk with this id")
    )
)]
pub async fn get_walk_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<WalkDto>, ApiError> {
    let walk = state.catalog.walks.get(id).await?;
    Ok(Json(walk.into()))
}

#[utoipa::path(
    post,
    path = "/Walks",
    request_body = WalkRequest,
    responses(
        (status = 201, description = "Walk created; Location points at it", body = WalkDto),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse)
    )
)]
pub async fn create_walk_handler(
    State(state): State<AppState>,
    request: Result<Json<WalkRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = json_body(request)?;
    let walk = state.catalog.walks.create(request.into()).await?;
    let headers = location(COLLECTION, walk.id);
    Ok((StatusCode::CREATED, headers, Json(WalkDto::from(walk))))
}

#[utoipa::path(
    put,
    path = "/Walks/{id}",
    params(("id" = Uuid, Path, description = "Walk id")),
    request_body = WalkRequest,
    responses(
        (status = 200, description = "Walk replaced", body = WalkDto),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 404, description = "No walk with this id")
    )
)]
pub async fn update_walk_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    request: Result<Json<WalkRequest>, JsonRejection>,
) -> Result<Json<WalkDto>, ApiError> {
    let request = json_body(request)?;
    let walk = state.catalog.walks.update(id, request.into()).await?;
    Ok(Json(walk.into()))
}

#[utoipa::path(
    delete,
    path = "/Walks/{id}",
    params(("id" = Uuid, Path, description = "Walk id")),
    responses(
        (status = 200, description = "Walk removed; body is its final state", body = WalkDto),
        (status = 404, description = "No walk with this id")
    )
)]
pub async fn delete_walk_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<WalkDto>, ApiError> {
    let walk = state.catalog.walks.delete(id).await?;
    Ok(Json(walk.into()))
}
