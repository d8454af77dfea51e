use super::ServiceError;
use crate::domain::model::{Walk, WalkDraft};
use crate::domain::validation::WalkValidator;
use crate::storage::WalkRepository;
use std::sync::Arc;
use uuid::Uuid;

const ENTITY: &str = "Walk";

pub struct WalkService {
    walks: Arc<dyn WalkRepository>,
    validator: WalkValidator,
}

impl WalkService {
    pub fn new(walks: Arc<dyn WalkRepository>, validator: WalkValidator) -> Self {
        Self { walks, validator }
    }

    pub async fn list(&self) -> Result<Vec<Walk>, ServiceError> {
        Ok(self.walks.get_all().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Walk, ServiceError> {
        self.walks
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    async fn check(&self, draft: &WalkDraft) -> Result<(), ServiceError> {
        self.validator
            .validate(draft)
            .await?
            .into_result()
            .map_err(|errors| {
                tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "walk rejected");
                ServiceError::Validation(errors)
            })
    }

    /// Validates `draft`, then stores it under a fresh id.
    pub async fn create(&self, draft: WalkDraft) -> Result<Walk, ServiceError> {
        self.check(&draft).await?;
        let walk = self.walks.add(Walk::from_draft(Uuid::new_v4(), draft)).await?;
        tracing::info!(walk_id = %walk.id, "walk created");
        Ok(walk)
    }

    /// Validates `draft`, then replaces the whole record stored under `id`.
    pub async fn update(&self, id: Uuid, draft: WalkDraft) -> Result<Walk, ServiceError> {
        self.check(&draft).await?;
        let walk = self
            .walks
            .update(Walk::from_draft(id, draft))
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        tracing::info!(walk_id = %walk.id, "walk updated");
        Ok(walk)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Walk, ServiceError> {
        let walk = self
            .walks
            .delete(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        tracing::info!(walk_id = %walk.id, "walk deleted");
        Ok(walk)
    }
}
