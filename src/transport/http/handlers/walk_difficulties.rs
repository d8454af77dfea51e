use crate::transport::http::error::ApiError;
use crate::transport::http::handlers::common::{json_body, location, ResourceId};
use crate::transport::http::mapping::map_all;
use crate::transport::http::types::{AppState, WalkDifficultyDto, WalkDifficultyRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub const COLLECTION: &str = "/WalkDifficulties";

#[utoipa::path(
    get,
    path = "/WalkDifficulties",
    responses(
        (status = 200, description = "All walk difficulties", body = [WalkDifficultyDto]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_walk_difficulties_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<WalkDifficultyDto>>, ApiError> {
    let difficulties = state.catalog.walk_difficulties.list().await?;
    Ok(Json(map_all(difficulties)))
}

#[utoipa::path(
    get,
    path = "/WalkDifficulties/{id}",
    params(("id" = Uuid, Path, description = "Walk difficulty id")),
    responses(
        (status = 200, description = "The walk difficulty", body = WalkDifficultyDto),
        (status = 404, description = "No walk difficulty with this id")
    )
)]
pub async fn get_walk_difficulty_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<WalkDifficultyDto>, ApiError> {
    let difficulty = state.catalog.walk_difficulties.get(id).await?;
    Ok(Json(difficulty.into()))
}

#[utoipa::path(
    post,
    path = "/WalkDifficulties",
    request_body = WalkDifficultyRequest,
    responses(
        (status = 201, description = "Walk difficulty created; Location points at it", body = WalkDifficultyDto),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse)
    )
)]
pub async fn create_walk_difficulty_handler(
    State(state): State<AppState>,
    request: Result<Json<WalkDifficultyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = json_body(request)?;
    let difficulty = state.catalog.walk_difficulties.create(request.into()).await?;
    let headers = location(COLLECTION, difficulty.id);
    Ok((StatusCode::CREATED, headers, Json(WalkDifficultyDto::from(difficulty))))
}

#[utoipa::path(
    put,
    path = "/WalkDifficulties/{id}",
    params(("id" = Uuid, Path, description = "Walk difficulty id")),
    request_body = WalkDifficultyRequest,
    responses(
        (status = 200, description = "Walk difficulty replaced", body = WalkDifficultyDto),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 404, description = "No walk difficulty with this id")
    )
)]
pub async fn update_walk_difficulty_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    request: Result<Json<WalkDifficultyRequest>, JsonRejection>,
) -> Result<Json<WalkDifficultyDto>, ApiError> {
    let request = json_body(request)?;
    let difficulty = state.catalog.walk_difficulties.update(id, request.into()).await?;
    Ok(Json(difficulty.into()))
}

#[utoipa::path(
    delete,
    path = "/WalkDifficulties/{id}",
    params(("id" = Uuid, Path, description = "Walk difficulty id")),
    responses(
        (status = 200, description = "Walk difficulty removed; body is its final state", body = WalkDifficultyDto),
        (status = 404, description = "No walk difficulty with this id"),
        (status = 409, description = "Still referenced by walks (restrict policy)", body = ValidationErrorResponse)
    )
)]
pub async fn delete_walk_difficulty_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<WalkDifficultyDto>, ApiError> {
    let difficulty = state.catalog.walk_difficulties.delete(id).await?;
    Ok(Json(difficulty.into()))
}
