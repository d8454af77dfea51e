//! Field-by-field conversion between stored records and wire shapes.

use crate::domain::model::{
    Region, RegionDraft, Walk, WalkDifficulty, WalkDifficultyDraft, WalkDraft,
};
use crate::transport::http::types::{
    RegionDto, RegionRequest, WalkDifficultyDto, WalkDifficultyRequest, WalkDto, WalkRequest,
};

impl From<Region> for RegionDto {
    fn from(r: Region) -> Self {
        Self {
            id: r.id,
            code: r.code,
            name: r.name,
            lat: r.lat,
            long: r.long,
            image: r.image,
        }
    }
}

impl From<RegionRequest> for RegionDraft {
    fn from(r: RegionRequest) -> Self {
        Self {
            code: r.code,
            name: r.name,
            lat: r.lat,
            long: r.long,
            // Blank image references are stored as "no image".
            image: r.image.filter(|s| !s.trim().is_empty()),
        }
    }
}

impl From<WalkDifficulty> for WalkDifficultyDto {
    fn from(d: WalkDifficulty) -> Self {
        Self {
            id: d.id,
            code: d.code,
        }
    }
}

impl From<WalkDifficultyRequest> for WalkDifficultyDraft {
    fn from(d: WalkDifficultyRequest) -> Self {
        Self { code: d.code }
    }
}

impl From<Walk> for WalkDto {
    fn from(w: Walk) -> Self {
        Self {
            id: w.id,
            name: w.name,
            length: w.length,
            region_id: w.region_id,
            walk_difficulty_id: w.walk_difficulty_id,
        }
    }
}

impl From<WalkRequest> for WalkDraft {
    fn from(w: WalkRequest) -> Self {
        Self {
            name: w.name,
            length: w.length,
            region_id: w.region_id,
            walk_difficulty_id: w.walk_difficulty_id,
        }
    }
}

/// Maps every record of a listing to its wire form, keeping store order.
pub fn map_all<T, D: From<T>>(records: Vec<T>) -> Vec<D> {
    records.into_iter().map(D::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn walk_serializes_with_wire_field_names() {
        let id = Uuid::new_v4();
        let region_id = Uuid::new_v4();
        let difficulty_id = Uuid::new_v4();
        let dto = WalkDto::from(Walk {
            id,
            name: "Lake Track".to_string(),
            length: 5.2,
            region_id,
            walk_difficulty_id: difficulty_id,
        });

        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            json!({
                "Id": id,
                "Name": "Lake Track",
                "Length": 5.2,
                "RegionId": region_id,
                "WalkDifficultyId": difficulty_id,
            })
        );
    }

    #[test]
    fn requests_accept_camel_case_and_defaults() {
        let region_id = Uuid::new_v4();
        let request: WalkRequest = serde_json::from_value(json!({
            "name": "Lake Track",
            "regionId": region_id,
        }))
        .unwrap();
        let draft = WalkDraft::from(request);

        assert_eq!(draft.name, "Lake Track");
        assert_eq!(draft.length, 0.0);
        assert_eq!(draft.region_id, region_id);
        assert!(draft.walk_difficulty_id.is_nil());
    }

    #[test]
    fn blank_region_image_becomes_none() {
        let request: RegionRequest = serde_json::from_value(json!({
            "Code": "OTA",
            "Name": "Otago",
            "Lat": -45.0,
            "Long": 170.5,
            "Image": "  ",
        }))
        .unwrap();
        assert_eq!(RegionDraft::from(request).image, None);
    }
}
