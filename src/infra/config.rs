//! Centralized configuration (environment variables + defaults).
//!
//! A `.env` file in the working directory is honored when present.

use crate::app::catalog::CatalogPolicies;
use crate::domain::policy::{FieldValidationPolicy, ReferenceDeletePolicy};
use std::str::FromStr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "in-memory" => Ok(Self::Memory),
            other => Err(format!("expected 'postgres' or 'memory', got '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub backend: StoreBackend,
    /// Present only for the Postgres backend.
    pub database: Option<DatabaseConfig>,
    pub policies: CatalogPolicies,
}

impl AppConfig {
    /// Reads every setting, failing on the first missing or malformed one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let backend = store_backend()?;
        let database = match backend {
            StoreBackend::Postgres => Some(DatabaseConfig {
                url: database_url()?,
                max_connections: max_connections()?,
            }),
            StoreBackend::Memory => None,
        };

        Ok(Self {
            bind_addr: bind_addr(),
            backend,
            database,
            policies: CatalogPolicies {
                field_validation: walk_field_validation()?,
                reference_delete: reference_delete_policy()?,
            },
        })
    }
}

fn parse_or_default<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            value.parse::<T>().map_err(|e| ConfigError::Invalid {
                name,
                value,
                reason: e.to_string(),
            })
        }
        _ => Ok(default),
    }
}

/// Listen address for the HTTP server.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}

pub fn store_backend() -> Result<StoreBackend, ConfigError> {
    parse_or_default("STORE_BACKEND", StoreBackend::Postgres)
}

/// Database URL must be provided (no default) for safety.
pub fn database_url() -> Result<String, ConfigError> {
    std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))
}

/// Pool size, at least 1.
pub fn max_connections() -> Result<u32, ConfigError> {
    Ok(parse_or_default("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?.max(1))
}

pub fn walk_field_validation() -> Result<FieldValidationPolicy, ConfigError> {
    parse_or_default("WALK_FIELD_VALIDATION", FieldValidationPolicy::Enforce)
}

pub fn reference_delete_policy() -> Result<ReferenceDeletePolicy, ConfigError> {
    parse_or_default("REFERENCE_DELETE_POLICY", ReferenceDeletePolicy::Ignore)
}
