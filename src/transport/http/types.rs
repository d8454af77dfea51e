//! Wire representations exchanged over HTTP.
//!
//! Field names are PascalCase on the wire. Request bodies also accept the
//! camelCase spelling, and every request field is optional at the JSON level:
//! a missing value takes its default and is then judged by validation.

use crate::app::catalog::{Catalog, CatalogPolicies};
use crate::domain::validation::FieldErrors;
use crate::storage::Stores;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub stores: Stores,
}

impl AppState {
    pub fn new(stores: Stores, policies: CatalogPolicies) -> Self {
        Self {
            catalog: Arc::new(Catalog::new(&stores, policies)),
            stores,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RegionDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub lat: f64,
    pub long: f64,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct WalkDifficultyDto {
    pub id: Uuid,
    pub code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct WalkDto {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

/// Body of `POST /Regions` and `PUT /Regions/{id}`.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegionRequest {
    #[serde(alias = "code")]
    pub code: String,
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "lat")]
    pub lat: f64,
    #[serde(alias = "long")]
    pub long: f64,
    #[serde(alias = "image")]
    pub image: Option<String>,
}

/// Body of `POST /WalkDifficulties` and `PUT /WalkDifficulties/{id}`.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct WalkDifficultyRequest {
    #[serde(alias = "code")]
    pub code: String,
}

/// Body of `POST /Walks` and `PUT /Walks/{id}`.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct WalkRequest {
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "length")]
    pub length: f64,
    #[serde(alias = "regionId")]
    pub region_id: Uuid,
    #[serde(alias = "walkDifficultyId")]
    pub walk_difficulty_id: Uuid,
}

/// 400/409 body: wire field name → messages.
#[derive(Serialize, Debug, ToSchema)]
pub struct ValidationErrorResponse {
    #[schema(value_type = Object)]
    pub errors: FieldErrors,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
}
