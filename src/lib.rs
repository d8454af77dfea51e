pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::catalog::{Catalog, CatalogPolicies, ServiceError};
pub use app::database_service::DatabaseService;
pub use domain::policy::{FieldValidationPolicy, ReferenceDeletePolicy};
pub use infra::config::AppConfig;
pub use storage::Stores;
