use sqlx::FromRow;
use uuid::Uuid;

/// A hiking trail.
///
/// `region_id` and `walk_difficulty_id` are plain references: the store does not
/// enforce them, the [`WalkValidator`](crate::domain::validation::WalkValidator)
/// does at write time.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Walk {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

/// Candidate walk for a create or a full-replacement update.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkDraft {
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

impl Walk {
    pub fn from_draft(id: Uuid, draft: WalkDraft) -> Self {
        Self {
            id,
            name: draft.name,
            length: draft.length,
            region_id: draft.region_id,
            walk_difficulty_id: draft.walk_difficulty_id,
        }
    }
}
