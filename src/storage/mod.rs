//! Entity stores for regions, walk difficulties and walks.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;

pub use error::RepoError;
pub use repository::{RegionRepository, WalkDifficultyRepository, WalkRepository};

use crate::domain::model::{Region, Walk, WalkDifficulty};
use memory::MemoryTable;
use postgres::{PgRegionRepository, PgWalkDifficultyRepository, PgWalkRepository};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
enum Backend {
    Postgres(PgPool),
    Memory,
}

/// The three repositories a request handler can reach, sharing one backend.
#[derive(Clone)]
pub struct Stores {
    pub regions: Arc<dyn RegionRepository>,
    pub walk_difficulties: Arc<dyn WalkDifficultyRepository>,
    pub walks: Arc<dyn WalkRepository>,
    backend: Backend,
}

impl Stores {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            regions: Arc::new(PgRegionRepository::new(pool.clone())),
            walk_difficulties: Arc::new(PgWalkDifficultyRepository::new(pool.clone())),
            walks: Arc::new(PgWalkRepository::new(pool.clone())),
            backend: Backend::Postgres(pool),
        }
    }

    /// Process-local store; contents are lost on exit.
    pub fn in_memory() -> Self {
        Self {
            regions: Arc::new(MemoryTable::<Region>::default()),
            walk_difficulties: Arc::new(MemoryTable::<WalkDifficulty>::default()),
            walks: Arc::new(MemoryTable::<Walk>::default()),
            backend: Backend::Memory,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Postgres(_) => "postgres",
            Backend::Memory => "memory",
        }
    }

    /// Checks that the backend can serve queries.
    pub async fn ping(&self) -> Result<(), RepoError> {
        match &self.backend {
            Backend::Postgres(pool) => {
                sqlx::query("SELECT 1")
                    .execute(pool)
                    .await
                    .map_err(|e| RepoError::database("ping", e))?;
                Ok(())
            }
            Backend::Memory => Ok(()),
        }
    }
}
