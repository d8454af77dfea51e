//! In-process store backed by `tokio::sync::RwLock`-guarded maps.
//!
//! Used for local runs (`STORE_BACKEND=memory`) and by the HTTP tests. Each
//! operation takes the table lock once, so single-record writes are atomic.

use crate::domain::model::{Region, Walk, WalkDifficulty};
use crate::storage::repository::{RegionRepository, WalkDifficultyRepository, WalkRepository};
use crate::storage::RepoError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

pub trait Keyed: Clone + Send + Sync {
    fn key(&self) -> Uuid;
}

impl Keyed for Region {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for WalkDifficulty {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Walk {
    fn key(&self) -> Uuid {
        self.id
    }
}

pub struct MemoryTable<T> {
    rows: RwLock<HashMap<Uuid, T>>,
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Keyed> MemoryTable<T> {
    async fn all(&self) -> Vec<T> {
        self.rows.read().await.values().cloned().collect()
    }

    async fn find(&self, id: Uuid) -> Option<T> {
        self.rows.read().await.get(&id).cloned()
    }

    async fn insert(&self, row: T) -> T {
        self.rows.write().await.insert(row.key(), row.clone());
        row
    }

    async fn replace(&self, row: T) -> Option<T> {
        let mut rows = self.rows.write().await;
        let slot = rows.get_mut(&row.key())?;
        *slot = row.clone();
        Some(row)
    }

    async fn remove(&self, id: Uuid) -> Option<T> {
        self.rows.write().await.remove(&id)
    }

    async fn any(&self, pred: impl Fn(&T) -> bool) -> bool {
        self.rows.read().await.values().any(pred)
    }
}

#[async_trait]
impl RegionRepository for MemoryTable<Region> {
    async fn get_all(&self) -> Result<Vec<Region>, RepoError> {
        Ok(self.all().await)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Region>, RepoError> {
        Ok(self.find(id).await)
    }

    async fn add(&self, region: Region) -> Result<Region, RepoError> {
        Ok(self.insert(region).await)
    }

    async fn update(&self, region: Region) -> Result<Option<Region>, RepoError> {
        Ok(self.replace(region).await)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>, RepoError> {
        Ok(self.remove(id).await)
    }
}

#[async_trait]
impl WalkDifficultyRepository for MemoryTable<WalkDifficulty> {
    async fn get_all(&self) -> Result<Vec<WalkDifficulty>, RepoError> {
        Ok(self.all().await)
    }

    async fn get(&self, id: Uuid) -> Result<Option<WalkDifficulty>, RepoError> {
        Ok(self.find(id).await)
    }

    async fn add(&self, difficulty: WalkDifficulty) -> Result<WalkDifficulty, RepoError> {
        Ok(self.insert(difficulty).await)
    }

    async fn update(
        &self,
        difficulty: WalkDifficulty,
    ) -> Result<Option<WalkDifficulty>, RepoError> {
        Ok(self.replace(difficulty).await)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>, RepoError> {
        Ok(self.remove(id).await)
    }
}

#[async_trait]
impl WalkRepository for MemoryTable<Walk> {
    async fn get_all(&self) -> Result<Vec<Walk>, RepoError> {
        Ok(self.all().await)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Walk>, RepoError> {
        Ok(self.find(id).await)
    }

    async fn add(&self, walk: Walk) -> Result<Walk, RepoError> {
        Ok(self.insert(walk).await)
    }

    async fn update(&self, walk: Walk) -> Result<Option<Walk>, RepoError> {
        Ok(self.replace(walk).await)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Walk>, RepoError> {
        Ok(self.remove(id).await)
    }

    async fn any_in_region(&self, region_id: Uuid) -> Result<bool, RepoError> {
        Ok(self.any(|w| w.region_id == region_id).await)
    }

    async fn any_with_difficulty(&self, walk_difficulty_id: Uuid) -> Result<bool, RepoError> {
        Ok(self.any(|w| w.walk_difficulty_id == walk_difficulty_id).await)
    }
}
