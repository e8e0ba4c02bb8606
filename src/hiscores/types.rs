//! Record types decoded from the lite-text hiscores response.

use serde::Serialize;

/// One skill row in upstream field order: rank, level, experience.
///
/// Values are carried as opaque text. The service reports placeholder
/// values (e.g. `-1`) for unranked skills and those pass through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillRecord {
    pub rank: String,
    pub level: String,
    pub experience: String,
}

/// A skill record paired with its display name.
///
/// Used for printing and JSON serialization.
#[derive(Debug, Serialize)]
pub struct LabeledSkill<'a> {
    /// Skill name, `Total` for the aggregate row.
    pub skill: &'static str,
    #[serde(flatten)]
    pub record: &'a SkillRecord,
}
