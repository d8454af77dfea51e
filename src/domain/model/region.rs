use sqlx::FromRow;
use uuid::Uuid;

/// A geographic area that walks belong to.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Region {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub lat: f64,
    pub long: f64,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionDraft {
    pub code: String,
    pub name: String,
    pub lat: f64,
    pub long: f64,
    pub image: Option<String>,
}

impl Region {
    /// Builds the stored record for `draft` under `id`.
    pub fn from_draft(id: Uuid, draft: RegionDraft) -> Self {
        Self {
            id,
            code: draft.code,
            name: draft.name,
            lat: draft.lat,
            long: draft.long,
            image: draft.image,
        }
    }
}
