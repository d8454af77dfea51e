//! Postgres connection and bootstrap tables.
//!
//! The catalog owns three tables. They are created with `IF NOT EXISTS` on
//! every start; there is no versioned migration history.

use crate::infra::config::DatabaseConfig;
use crate::storage::Stores;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Tables the catalog creates and serves, in creation order.
pub const CATALOG_TABLES: &[&str] = &["regions", "walk_difficulties", "walks"];

const BOOTSTRAP_DDL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS regions (
        id UUID PRIMARY KEY,
        code TEXT NOT NULL,
        name TEXT NOT NULL,
        lat DOUBLE PRECISION NOT NULL,
        long DOUBLE PRECISION NOT NULL,
        image TEXT
    )",
    "CREATE TABLE IF NOT EXISTS walk_difficulties (
        id UUID PRIMARY KEY,
        code TEXT NOT NULL
    )",
    // No FOREIGN KEY on region_id / walk_difficulty_id.
    "CREATE TABLE IF NOT EXISTS walks (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        length DOUBLE PRECISION NOT NULL,
        region_id UUID NOT NULL,
        walk_difficulty_id UUID NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS walks_region_id_idx ON walks (region_id)",
    "CREATE INDEX IF NOT EXISTS walks_walk_difficulty_id_idx ON walks (walk_difficulty_id)",
];

/// Advisory lock key held while the bootstrap DDL runs.
const SCHEMA_LOCK_KEY: i64 = 0x6e7a_7761_6c6b;

pub struct DatabaseService {
    pool: PgPool,
}

impl DatabaseService {
    /// Connects to Postgres and makes sure the catalog tables exist.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;

        let service = Self { pool };
        service.ensure_schema().await?;
        Ok(service)
    }

    /// Runs the bootstrap DDL under a transaction-scoped advisory lock.
    /// `CREATE TABLE IF NOT EXISTS` is not safe against a concurrent creator;
    /// two of them can both fail on `pg_type`'s unique index.
    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SCHEMA_LOCK_KEY)
            .execute(&mut *tx)
            .await?;
        for ddl in BOOTSTRAP_DDL {
            sqlx::query(ddl).execute(&mut *tx).await?;
        }
        tx.commit().await?;
        tracing::debug!(tables = ?CATALOG_TABLES, "catalog tables ensured");
        Ok(())
    }

    /// Row count per catalog table, in [`CATALOG_TABLES`] order.
    pub async fn table_counts(&self) -> anyhow::Result<Vec<(&'static str, i64)>> {
        let mut counts = Vec::with_capacity(CATALOG_TABLES.len());
        for table in CATALOG_TABLES {
            let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
                .fetch_one(&self.pool)
                .await?;
            counts.push((*table, count));
        }
        Ok(counts)
    }

    /// Deletes every catalog row. Used by tests that share a database.
    pub async fn clear_db(&self) -> anyhow::Result<()> {
        for table in CATALOG_TABLES.iter().rev() {
            sqlx::query(&format!("DELETE FROM {}", table))
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    pub fn stores(&self) -> Stores {
        Stores::postgres(self.pool.clone())
    }
}
