pub mod error;
pub mod mapping;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod common;
    pub mod health;
    pub mod regions;
    pub mod walk_difficulties;
    pub mod walks;
}

pub use error::ApiError;
pub use router::{create_router, ApiDoc};
pub use types::AppState;
