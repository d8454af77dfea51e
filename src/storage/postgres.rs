//! Postgres-backed repositories.
//!
//! Tables are created by [`DatabaseService`](crate::app::database_service::DatabaseService).
//! There are no foreign keys between them; referential checks live in the
//! validator.

use crate::domain::model::{Region, Walk, WalkDifficulty};
use crate::storage::repository::{RegionRepository, WalkDifficultyRepository, WalkRepository};
use crate::storage::RepoError;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

const REGION_COLUMNS: &str = "id, code, name, lat, long, image";
const WALK_DIFFICULTY_COLUMNS: &str = "id, code";
const WALK_COLUMNS: &str = "id, name, length, region_id, walk_difficulty_id";

#[derive(Clone)]
pub struct PgRegionRepository {
    pool: PgPool,
}

impl PgRegionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionRepository for PgRegionRepository {
    async fn get_all(&self) -> Result<Vec<Region>, RepoError> {
        sqlx::query_as::<_, Region>(&format!("SELECT {} FROM regions", REGION_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("regions.get_all", e))
    }

    async fn get(&self, id: Uuid) -> Result<Option<Region>, RepoError> {
        sqlx::query_as::<_, Region>(&format!(
            "SELECT {} FROM regions WHERE id = $1",
            REGION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("regions.get", e))
    }

    async fn add(&self, region: Region) -> Result<Region, RepoError> {
        sqlx::query_as::<_, Region>(&format!(
            "INSERT INTO regions ({cols}) VALUES ($1, $2, $3, $4, $5, $6) RETURNING {cols}",
            cols = REGION_COLUMNS
        ))
        .bind(region.id)
        .bind(&region.code)
        .bind(&region.name)
        .bind(region.lat)
        .bind(region.long)
        .bind(&region.image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::database("regions.add", e))
    }

    async fn update(&self, region: Region) -> Result<Option<Region>, RepoError> {
        sqlx::query_as::<_, Region>(&format!(
            "UPDATE regions SET code = $2, name = $3, lat = $4, long = $5, image = $6
             WHERE id = $1 RETURNING {}",
            REGION_COLUMNS
        ))
        .bind(region.id)
        .bind(&region.code)
        .bind(&region.name)
        .bind(region.lat)
        .bind(region.long)
        .bind(&region.image)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("regions.update", e))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>, RepoError> {
        sqlx::query_as::<_, Region>(&format!(
            "DELETE FROM regions WHERE id = $1 RETURNING {}",
            REGION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("regions.delete", e))
    }
}

#[derive(Clone)]
pub struct PgWalkDifficultyRepository {
    pool: PgPool,
}

impl PgWalkDifficultyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WalkDifficultyRepository for PgWalkDifficultyRepository {
    async fn get_all(&self) -> Result<Vec<WalkDifficulty>, RepoError> {
        sqlx::query_as::<_, WalkDifficulty>(&format!(
            "SELECT {} FROM walk_difficulties",
            WALK_DIFFICULTY_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("walk_difficulties.get_all", e))
    }

    async fn get(&self, id: Uuid) -> Result<Option<WalkDifficulty>, RepoError> {
        sqlx::query_as::<_, WalkDifficulty>(&format!(
            "SELECT {} FROM walk_difficulties WHERE id = $1",
            WALK_DIFFICULTY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("walk_difficulties.get", e))
    }

    async fn add(&self, difficulty: WalkDifficulty) -> Result<WalkDifficulty, RepoError> {
        sqlx::query_as::<_, WalkDifficulty>(&format!(
            "INSERT INTO walk_difficulties ({cols}) VALUES ($1, $2) RETURNING {cols}",
            cols = WALK_DIFFICULTY_COLUMNS
        ))
        .bind(difficulty.id)
        .bind(&difficulty.code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::database("walk_difficulties.add", e))
    }

    async fn update(
        &self,
        difficulty: WalkDifficulty,
    ) -> Result<Option<WalkDifficulty>, RepoError> {
        sqlx::query_as::<_, WalkDifficulty>(&format!(
            "UPDATE walk_difficulties SET code = $2 WHERE id = $1 RETURNING {}",
            WALK_DIFFICULTY_COLUMNS
        ))
        .bind(difficulty.id)
        .bind(&difficulty.code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("walk_difficulties.update", e))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<WalkDifficulty>, RepoError> {
        sqlx::query_as::<_, WalkDifficulty>(&format!(
            "DELETE FROM walk_difficulties WHERE id = $1 RETURNING {}",
            WALK_DIFFICULTY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("walk_difficulties.delete", e))
    }
}

#[derive(Clone)]
pub struct PgWalkRepository {
    pool: PgPool,
}

impl PgWalkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists_where(
        &self,
        column: &'static str,
        value: Uuid,
        operation: &'static str,
    ) -> Result<bool, RepoError> {
        sqlx::query_scalar::<_, bool>(&format!(
            "SELECT EXISTS (SELECT 1 FROM walks WHERE {} = $1)",
            column
        ))
        .bind(value)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::database(operation, e))
    }
}

#[async_trait]
impl WalkRepository for PgWalkRepository {
    async fn get_all(&self) -> Result<Vec<Walk>, RepoError> {
        sqlx::query_as::<_, Walk>(&format!("SELECT {} FROM walks", WALK_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("walks.get_all", e))
    }

    async fn get(&self, id: Uuid) -> Result<Option<Walk>, RepoError> {
        sqlx::query_as::<_, Walk>(&format!("SELECT {} FROM walks WHERE id = $1", WALK_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("walks.get", e))
    }

    async fn add(&self, walk: Walk) -> Result<Walk, RepoError> {
        sqlx::query_as::<_, Walk>(&format!(
            "INSERT INTO walks ({cols}) VALUES ($1, $2, $3, $4, $5) RETURNING {cols}",
            cols = WALK_COLUMNS
        ))
        .bind(walk.id)
        .bind(&walk.name)
        .bind(walk.length)
        .bind(walk.region_id)
        .bind(walk.walk_difficulty_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::database("walks.add", e))
    }

    async fn update(&self, walk: Walk) -> Result<Option<Walk>, RepoError> {
        sqlx::query_as::<_, Walk>(&format!(
            "UPDATE walks SET name = $2, length = $3, region_id = $4, walk_difficulty_id = $5
             WHERE id = $1 RETURNING {}",
            WALK_COLUMNS
        ))
        .bind(walk.id)
        .bind(&walk.name)
        .bind(walk.length)
        .bind(walk.region_id)
        .bind(walk.walk_difficulty_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("walks.update", e))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Walk>, RepoError> {
        sqlx::query_as::<_, Walk>(&format!(
            "DELETE FROM walks WHERE id = $1 RETURNING {}",
            WALK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("walks.delete", e))
    }

    async fn any_in_region(&self, region_id: Uuid) -> Result<bool, RepoError> {
        self.exists_where("region_id", region_id, "walks.any_in_region")
            .await
    }

    async fn any_with_difficulty(&self, walk_difficulty_id: Uuid) -> Result<bool, RepoError> {
        self.exists_where(
            "walk_difficulty_id",
            walk_difficulty_id,
            "walks.any_with_difficulty",
        )
        .await
    }
}
