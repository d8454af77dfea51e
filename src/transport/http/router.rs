use crate::transport::http::handlers::{health, regions, walk_difficulties, walks};
use crate::transport::http::types::{
    ErrorResponse, HealthResponse, RegionDto, RegionRequest, ValidationErrorResponse,
    WalkDifficultyDto, WalkDifficultyRequest, WalkDto, WalkRequest,
};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        regions::list_regions_handler,
        regions::get_region_handler,
        regions::create_region_handler,
        regions::update_region_handler,
        regions::delete_region_handler,
        walk_difficulties::list_walk_difficulties_handler,
        walk_difficulties::get_walk_difficulty_handler,
        walk_difficulties::create_walk_difficulty_handler,
        walk_difficulties::update_walk_difficulty_handler,
        walk_difficulties::delete_walk_difficulty_handler,
        walks::list_walks_handler,
        walks::get_walk_handler,
        walks::create_walk_handler,
        walks::update_walk_handler,
        walks::delete_walk_handler
    ),
    components(schemas(
        RegionDto,
        RegionRequest,
        WalkDifficultyDto,
        WalkDifficultyRequest,
        WalkDto,
        WalkRequest,
        ValidationErrorResponse,
        ErrorResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            regions::COLLECTION,
            get(regions::list_regions_handler).post(regions::create_region_handler),
        )
        .route(
            "/Regions/:id",
            get(regions::get_region_handler)
                .put(regions::update_region_handler)
                .delete(regions::delete_region_handler),
        )
        .route(
            walk_difficulties::COLLECTION,
            get(walk_difficulties::list_walk_difficulties_handler)
                .post(walk_difficulties::create_walk_difficulty_handler),
        )
        .route(
            "/WalkDifficulties/:id",
            get(walk_difficulties::get_walk_difficulty_handler)
                .put(walk_difficulties::update_walk_difficulty_handler)
                .delete(walk_difficulties::delete_walk_difficulty_handler),
        )
        .route(
            walks::COLLECTION,
            get(walks::list_walks_handler).post(walks::create_walk_handler),
        )
        .route(
            "/Walks/:id",
            get(walks::get_walk_handler)
                .put(walks::update_walk_handler)
                .delete(walks::delete_walk_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
