//! Skill record domain model.

use serde::{Deserialize, Serialize};

/// Highest permitted proficiency level.
pub const MAX_LEVEL: u8 = 100;

/// A single skill entry in the portfolio.
///
/// Records are owned exclusively by [`RecordStore`](super::RecordStore);
/// `id` uniquely identifies a record within the store and never changes
/// after creation. Field names serialize in camelCase to match the JSON
/// documents the store is seeded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    /// Unique record identifier, always > 0
    pub id: u32,
    /// Category label (free text; the category set is suggestions only)
    pub category: String,
    /// Skill name shown in the table
    pub skill_name: String,
    /// Proficiency level in [0, 100]
    pub level: u8,
}
