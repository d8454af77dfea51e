//! Repository contracts, one per entity.
//!
//! Every call is applied atomically on its own; nothing here spans more than one
//! record. `update` and `delete` return `Ok(None)` when the id does not exist.

use crate::domain::model::{Region, Walk, WalkDifficulty};
use crate::storage::RepoError;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegionRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Region>, RepoError>;
    async fn get(&self, id: Uuid) -> Result<Option<Region>, RepoError>;
    async fn add(&self, region: Region) -> Result<Region, RepoError>;
    /// Replaces the record with `region.id`.
    async fn update(&self, region: Region) -> Result<Option<Region>, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<Option<Region>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WalkDifficultyRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<WalkDifficulty>, RepoError>;
    async fn get(&self, id: Uuid) -> Result<Option<WalkDifficulty>, RepoError>;
    async fn add(&self, difficulty: WalkDifficulty) -> Result<WalkDifficulty, RepoError>;
    async fn update(&self, difficulty: WalkDifficulty)
        -> Result<Option<WalkDifficulty>, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WalkRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Walk>, RepoError>;
    async fn get(&self, id: Uuid) -> Result<Option<Walk>, RepoError>;
    async fn add(&self, walk: Walk) -> Result<Walk, RepoError>;
    async fn update(&self, walk: Walk) -> Result<Option<Walk>, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<Option<Walk>, RepoError>;

    /// True when at least one walk references `region_id`.
    async fn any_in_region(&self, region_id: Uuid) -> Result<bool, RepoError>;
    /// True when at least one walk references `walk_difficulty_id`.
    async fn any_with_difficulty(&self, walk_difficulty_id: Uuid) -> Result<bool, RepoError>;
}
