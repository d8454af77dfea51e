//! Persistence records for the walks catalog.
//!
//! Each entity has a stored record (what the store returns) and a draft (what a
//! create or update writes). Updates replace the whole record, so the same draft
//! type serves both operations.

pub mod region;
pub mod walk;
pub mod walk_difficulty;

pub use region::{Region, RegionDraft};
pub use walk::{Walk, WalkDraft};
pub use walk_difficulty::{WalkDifficulty, WalkDifficultyDraft};
