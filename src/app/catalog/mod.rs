//! Catalog operations behind the HTTP handlers.
//!
//! Each service takes drafts in and hands stored records back; mapping to and
//! from wire shapes stays in the transport layer.

mod region_service;
mod walk_difficulty_service;
mod walk_service;

pub use region_service::RegionService;
pub use walk_difficulty_service::WalkDifficultyService;
pub use walk_service::WalkService;

use crate::domain::policy::{FieldValidationPolicy, ReferenceDeletePolicy};
use crate::domain::validation::{FieldErrors, WalkValidator};
use crate::storage::{RepoError, Stores};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("validation failed ({} error(s))", .0.count())]
    Validation(FieldErrors),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("{entity} {id} is still referenced by one or more walks")]
    Referenced { entity: &'static str, id: Uuid },

    #[error(transparent)]
    Store(#[from] RepoError),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }
}

/// Startup-selected behavior for catalog writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogPolicies {
    pub field_validation: FieldValidationPolicy,
    pub reference_delete: ReferenceDeletePolicy,
}

/// All catalog services over one set of stores.
pub struct Catalog {
    pub regions: RegionService,
    pub walk_difficulties: WalkDifficultyService,
    pub walks: WalkService,
}

impl Catalog {
    pub fn new(stores: &Stores, policies: CatalogPolicies) -> Self {
        let validator = WalkValidator::new(
            stores.regions.clone(),
            stores.walk_difficulties.clone(),
            policies.field_validation,
        );
        Self {
            regions: RegionService::new(
                stores.regions.clone(),
                stores.walks.clone(),
                policies.reference_delete,
            ),
            walk_difficulties: WalkDifficultyService::new(
                stores.walk_difficulties.clone(),
                stores.walks.clone(),
                policies.reference_delete,
            ),
            walks: WalkService::new(stores.walks.clone(), validator),
        }
    }
}
