use sqlx::FromRow;
use uuid::Uuid;

/// Difficulty rating (e.g. `Easy`, `Medium`, `Hard`).
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct WalkDifficulty {
    pub id: Uuid,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkDifficultyDraft {
    pub code: String,
}

impl WalkDifficulty {
    pub fn from_draft(id: Uuid, draft: WalkDifficultyDraft) -> Self {
        Self {
            id,
            code: draft.code,
        }
    }
}
