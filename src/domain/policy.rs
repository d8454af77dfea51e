//! Write-side policies chosen at startup.

use std::str::FromStr;

/// Whether the non-referential field checks on walks run.
///
/// Referential checks (`RegionId`, `WalkDifficultyId`) always run; this only
/// governs `Name` (non-blank) and `Length` (positive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldValidationPolicy {
    #[default]
    Enforce,
    Off,
}

/// What deleting a Region or WalkDifficulty does when walks still reference it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceDeletePolicy {
    /// Delete unconditionally; referencing walks keep a dangling id.
    #[default]
    Ignore,
    /// Refuse the delete while any walk references the record.
    Restrict,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown policy value '{0}'")]
pub struct UnknownPolicy(pub String);

impl FromStr for FieldValidationPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "enforce" | "on" | "true" => Ok(Self::Enforce),
            "off" | "false" => Ok(Self::Off),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

impl FromStr for ReferenceDeletePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "restrict" => Ok(Self::Restrict),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}
