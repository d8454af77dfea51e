use super::ServiceError;
use crate::domain::model::{Region, RegionDraft};
use crate::domain::policy::ReferenceDeletePolicy;
use crate::domain::validation::validate_region;
use crate::storage::{RegionRepository, WalkRepository};
use std::sync::Arc;
use uuid::Uuid;

const ENTITY: &str = "Region";

pub struct RegionService {
    regions: Arc<dyn RegionRepository>,
    walks: Arc<dyn WalkRepository>,
    delete_policy: ReferenceDeletePolicy,
}

impl RegionService {
    pub fn new(
        regions: Arc<dyn RegionRepository>,
        walks: Arc<dyn WalkRepository>,
        delete_policy: ReferenceDeletePolicy,
    ) -> Self {
        Self {
            regions,
            walks,
            delete_policy,
        }
    }

    pub async fn list(&self) -> Result<Vec<Region>, ServiceError> {
        Ok(self.regions.get_all().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Region, ServiceError> {
        self.regions
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    pub async fn create(&self, draft: RegionDraft) -> Result<Region, ServiceError> {
        validate_region(&draft)
            .into_result()
            .map_err(ServiceError::Validation)?;
        let region = self
            .regions
            .add(Region::from_draft(Uuid::new_v4(), draft))
            .await?;
        tracing::info!(region_id = %region.id, code = %region.code, "region created");
        Ok(region)
    }

    pub async fn update(&self, id: Uuid, draft: RegionDraft) -> Result<Region, ServiceError> {
        validate_region(&draft)
            .into_result()
            .map_err(ServiceError::Validation)?;
        let region = self
            .regions
            .update(Region::from_draft(id, draft))
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        tracing::info!(region_id = %region.id, "region updated");
        Ok(region)
    }

    /// Removes the region. Under [`ReferenceDeletePolicy::Restrict`] a region
    /// still used by a walk is kept and `Referenced` is returned; a missing
    /// region is `NotFound` even when stale walks still carry its id.
    pub async fn delete(&self, id: Uuid) -> Result<Region, ServiceError> {
        if self.delete_policy == ReferenceDeletePolicy::Restrict {
            self.get(id).await?;
            if self.walks.any_in_region(id).await? {
                return Err(ServiceError::Referenced { entity: ENTITY, id });
            }
        }
        let region = self
            .regions
            .delete(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        tracing::info!(region_id = %region.id, "region deleted");
        Ok(region)
    }
}
