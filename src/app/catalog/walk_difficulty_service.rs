use super::ServiceError;
use crate::domain::model::{WalkDifficulty, WalkDifficultyDraft};
use crate::domain::policy::ReferenceDeletePolicy;
use crate::domain::validation::validate_walk_difficulty;
use crate::storage::{WalkDifficultyRepository, WalkRepository};
use std::sync::Arc;
use uuid::Uuid;

const ENTITY: &str = "WalkDifficulty";

pub struct WalkDifficultyService {
    walk_difficulties: Arc<dyn WalkDifficultyRepository>,
    walks: Arc<dyn WalkRepository>,
    delete_policy: ReferenceDeletePolicy,
}

impl WalkDifficultyService {
    pub fn new(
        walk_difficulties: Arc<dyn WalkDifficultyRepository>,
        walks: Arc<dyn WalkRepository>,
        delete_policy: ReferenceDeletePolicy,
    ) -> Self {
        Self {
            walk_difficulties,
            walks,
            delete_policy,
        }
    }

    pub async fn list(&self) -> Result<Vec<WalkDifficulty>, ServiceError> {
        Ok(self.walk_difficulties.get_all().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<WalkDifficulty, ServiceError> {
        self.walk_difficulties
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    pub async fn create(
        &self,
        draft: WalkDifficultyDraft,
    ) -> Result<WalkDifficulty, ServiceError> {
        validate_walk_difficulty(&draft)
            .into_result()
            .map_err(ServiceError::Validation)?;
        let difficulty = self
            .walk_difficulties
            .add(WalkDifficulty::from_draft(Uuid::new_v4(), draft))
            .await?;
        tracing::info!(walk_difficulty_id = %difficulty.id, code = %difficulty.code, "walk difficulty created");
        Ok(difficulty)
    }

    pub async fn update(
        &self,
        id: Uuid,
        draft: WalkDifficultyDraft,
    ) -> Result<WalkDifficulty, ServiceError> {
        validate_walk_difficulty(&draft)
            .into_result()
            .map_err(ServiceError::Validation)?;
        let difficulty = self
            .walk_difficulties
            .update(WalkDifficulty::from_draft(id, draft))
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        tracing::info!(walk_difficulty_id = %difficulty.id, "walk difficulty updated");
        Ok(difficulty)
    }

    /// Same contract as [`RegionService::delete`](super::RegionService::delete).
    pub async fn delete(&self, id: Uuid) -> Result<WalkDifficulty, ServiceError> {
        if self.delete_policy == ReferenceDeletePolicy::Restrict {
            self.get(id).await?;
            if self.walks.any_with_difficulty(id).await? {
                return Err(ServiceError::Referenced { entity: ENTITY, id });
            }
        }
        let difficulty = self
            .walk_difficulties
            .delete(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        tracing::info!(walk_difficulty_id = %difficulty.id, "walk difficulty deleted");
        Ok(difficulty)
    }
}
