//! Request validation for catalog writes.
//!
//! Errors are accumulated per wire field name rather than failing on the first
//! problem, so a single 400 response can report everything wrong with a request.

use crate::domain::model::{RegionDraft, WalkDifficultyDraft, WalkDraft};
use crate::domain::policy::FieldValidationPolicy;
use crate::storage::{RegionRepository, RepoError, WalkDifficultyRepository};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Wire field names used as error keys.
pub mod fields {
    pub const NAME: &str = "Name";
    pub const CODE: &str = "Code";
    pub const LENGTH: &str = "Length";
    pub const REGION_ID: &str = "RegionId";
    pub const WALK_DIFFICULTY_ID: &str = "WalkDifficultyId";
    pub const WALKS: &str = "Walks";
}

/// Field name → messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Total number of messages across all fields.
    pub fn count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Outcome of validating one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: FieldErrors,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// `Ok(())` when valid, otherwise the accumulated errors.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

impl From<FieldErrors> for ValidationReport {
    fn from(errors: FieldErrors) -> Self {
        Self { errors }
    }
}

fn is_positive_length(length: f64) -> bool {
    length.is_finite() && length > 0.0
}

fn required(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{} is required.", field));
    }
}

/// Checks a walk draft against the region and difficulty stores.
///
/// `RegionId` and `WalkDifficultyId` must each name an existing record. The two
/// lookups are independent and run concurrently. Nothing holds the records
/// between this check and the caller's write, so a concurrent delete can still
/// slip in between.
pub struct WalkValidator {
    regions: Arc<dyn RegionRepository>,
    walk_difficulties: Arc<dyn WalkDifficultyRepository>,
    policy: FieldValidationPolicy,
}

impl WalkValidator {
    pub fn new(
        regions: Arc<dyn RegionRepository>,
        walk_difficulties: Arc<dyn WalkDifficultyRepository>,
        policy: FieldValidationPolicy,
    ) -> Self {
        Self {
            regions,
            walk_difficulties,
            policy,
        }
    }

    pub async fn validate(&self, draft: &WalkDraft) -> Result<ValidationReport, RepoError> {
        let mut errors = FieldErrors::new();

        if self.policy == FieldValidationPolicy::Enforce {
            required(&mut errors, fields::NAME, &draft.name);
            if !is_positive_length(draft.length) {
                errors.add(
                    fields::LENGTH,
                    format!("{} should be greater than zero.", fields::LENGTH),
                );
            }
        }

        let (region, difficulty) = tokio::try_join!(
            self.regions.get(draft.region_id),
            self.walk_difficulties.get(draft.walk_difficulty_id)
        )?;

        if region.is_none() {
            errors.add(
                fields::REGION_ID,
                format!("{} is invalid.", fields::REGION_ID),
            );
        }
        if difficulty.is_none() {
            errors.add(
                fields::WALK_DIFFICULTY_ID,
                format!("{} is invalid.", fields::WALK_DIFFICULTY_ID),
            );
        }

        Ok(errors.into())
    }
}

pub fn validate_region(draft: &RegionDraft) -> ValidationReport {
    let mut errors = FieldErrors::new();
    required(&mut errors, fields::CODE, &draft.code);
    required(&mut errors, fields::NAME, &draft.name);
    errors.into()
}

pub fn validate_walk_difficulty(draft: &WalkDifficultyDraft) -> ValidationReport {
    let mut errors = FieldErrors::new();
    required(&mut errors, fields::CODE, &draft.code);
    errors.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Region, WalkDifficulty};
    use crate::storage::repository::{MockRegionRepository, MockWalkDifficultyRepository};
    use mockall::predicate::eq;
    use uuid::Uuid;

    fn draft(region_id: Uuid, walk_difficulty_id: Uuid) -> WalkDraft {
        WalkDraft {
            name: "Lake Track".to_string(),
            length: 5.2,
            region_id,
            walk_difficulty_id,
        }
    }

    fn otago(id: Uuid) -> Region {
        Region {
            id,
            code: "OTA".to_string(),
            name: "Otago".to_string(),
            lat: -45.0,
            long: 170.5,
            image: None,
        }
    }

    fn validator(
        regions: MockRegionRepository,
        difficulties: MockWalkDifficultyRepository,
        policy: FieldValidationPolicy,
    ) -> WalkValidator {
        WalkValidator::new(Arc::new(regions), Arc::new(difficulties), policy)
    }

    #[tokio::test]
    async fn existing_references_pass() {
        let region_id = Uuid::new_v4();
        let difficulty_id = Uuid::new_v4();
        let mut regions = MockRegionRepository::new();
        regions
            .expect_get()
            .with(eq(region_id))
            .returning(|id| Ok(Some(otago(id))));
        let mut difficulties = MockWalkDifficultyRepository::new();
        difficulties
            .expect_get()
            .with(eq(difficulty_id))
            .returning(|id| {
                Ok(Some(WalkDifficulty {
                    id,
                    code: "Easy".to_string(),
                }))
            });

        let report = validator(regions, difficulties, FieldValidationPolicy::Enforce)
            .validate(&draft(region_id, difficulty_id))
            .await
            .unwrap();

        assert!(report.is_valid());
    }

    #[tokio::test]
    async fn missing_difficulty_is_keyed_by_field() {
        let mut regions = MockRegionRepository::new();
        regions.expect_get().returning(|id| Ok(Some(otago(id))));
        let mut difficulties = MockWalkDifficultyRepository::new();
        difficulties.expect_get().returning(|_| Ok(None));

        let report = validator(regions, difficulties, FieldValidationPolicy::Enforce)
            .validate(&draft(Uuid::new_v4(), Uuid::new_v4()))
            .await
            .unwrap();

        assert!(!report.is_valid());
        assert!(report.errors().contains(fields::WALK_DIFFICULTY_ID));
        assert!(!report.errors().contains(fields::REGION_ID));
    }

    #[tokio::test]
    async fn both_missing_references_are_reported() {
        let mut regions = MockRegionRepository::new();
        regions.expect_get().returning(|_| Ok(None));
        let mut difficulties = MockWalkDifficultyRepository::new();
        difficulties.expect_get().returning(|_| Ok(None));

        let report = validator(regions, difficulties, FieldValidationPolicy::Off)
            .validate(&draft(Uuid::new_v4(), Uuid::new_v4()))
            .await
            .unwrap();

        assert_eq!(report.errors().count(), 2);
        assert_eq!(
            report.errors().fields().collect::<Vec<_>>(),
            vec![fields::REGION_ID, fields::WALK_DIFFICULTY_ID]
        );
    }

    #[tokio::test]
    async fn field_checks_follow_policy() {
        let blank = WalkDraft {
            name: "   ".to_string(),
            length: 0.0,
            region_id: Uuid::new_v4(),
            walk_difficulty_id: Uuid::new_v4(),
        };

        for (policy, expect_field_errors) in [
            (FieldValidationPolicy::Enforce, true),
            (FieldValidationPolicy::Off, false),
        ] {
            let mut regions = MockRegionRepository::new();
            regions.expect_get().returning(|id| Ok(Some(otago(id))));
            let mut difficulties = MockWalkDifficultyRepository::new();
            difficulties.expect_get().returning(|id| {
                Ok(Some(WalkDifficulty {
                    id,
                    code: "Hard".to_string(),
                }))
            });

            let report = validator(regions, difficulties, policy)
                .validate(&blank)
                .await
                .unwrap();

            assert_eq!(report.errors().contains(fields::NAME), expect_field_errors);
            assert_eq!(report.errors().contains(fields::LENGTH), expect_field_errors);
        }
    }

    #[test]
    fn only_finite_positive_lengths_count() {
        assert!(is_positive_length(0.1));
        for length in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(!is_positive_length(length));
        }
    }

    #[test]
    fn difficulty_code_is_required() {
        let report = validate_walk_difficulty(&WalkDifficultyDraft {
            code: String::new(),
        });
        assert_eq!(
            report.errors().get(fields::CODE),
            Some(&["Code is required.".to_string()][..])
        );
    }

    #[test]
    fn region_requires_code_and_name() {
        let report = validate_region(&RegionDraft {
            code: " ".to_string(),
            name: String::new(),
            lat: 0.0,
            long: 0.0,
            image: None,
        });
        assert_eq!(report.errors().count(), 2);
        assert!(report.clone().into_result().is_err());
    }
}
