//! Fixed skill-name table.

use super::types::{LabeledSkill, SkillRecord};
use crate::error::{Result, RuneScoreError};

/// Skill names in the service's fixed row order, index 0 = Total.
///
/// The lite endpoint returns bare numbers with no names, so the names
/// have to be provided here.
pub const SKILL_NAMES: [&str; 28] = [
    "Total",
    "Attack",
    "Defence",
    "Strength",
    "Constitution",
    "Ranged",
    "Prayer",
    "Magic",
    "Cooking",
    "Woodcutting",
    "Fletching",
    "Fishing",
    "Firemaking",
    "Crafting",
    "Smithing",
    "Mining",
    "Herblore",
    "Agility",
    "Thieving",
    "Slayer",
    "Farming",
    "Runecrafting",
    "Hunter",
    "Construction",
    "Summoning",
    "Dungeoneering",
    "Divination",
    "Invention",
];

/// Pair records with their skill names by position.
///
/// Fails loudly when the response carries more skill rows than the name
/// table covers, rather than truncating.
pub fn label_skills(records: &[SkillRecord]) -> Result<Vec<LabeledSkill<'_>>> {
    if records.len() > SKILL_NAMES.len() {
        return Err(RuneScoreError::UnknownSkillRows {
            rows: records.len(),
            known: SKILL_NAMES.len(),
        });
    }
    Ok(SKILL_NAMES
        .iter()
        .copied()
        .zip(records)
        .map(|(skill, record)| LabeledSkill { skill, record })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rank: &str, level: &str, experience: &str) -> SkillRecord {
        SkillRecord {
            rank: rank.to_string(),
            level: level.to_string(),
            experience: experience.to_string(),
        }
    }

    #[test]
    fn test_labels_follow_table_order() {
        let records = vec![record("1", "2898", "5600000000"), record("1", "99", "200000000")];
        let labeled = label_skills(&records).unwrap();
        assert_eq!(labeled.len(), 2);
        assert_eq!(labeled[0].skill, "Total");
        assert_eq!(labeled[1].skill, "Attack");
        assert_eq!(labeled[1].record.level, "99");
    }

    #[test]
    fn test_too_many_rows_is_an_error() {
        let records = vec![record("-1", "1", "0"); SKILL_NAMES.len() + 1];
        match label_skills(&records).unwrap_err() {
            RuneScoreError::UnknownSkillRows { rows, known } => {
                assert_eq!(rows, 29);
                assert_eq!(known, 28);
            }
            other => panic!("expected UnknownSkillRows, got {other:?}"),
        }
    }

    #[test]
    fn test_full_table_is_accepted() {
        let records = vec![record("-1", "1", "0"); SKILL_NAMES.len()];
        let labeled = label_skills(&records).unwrap();
        assert_eq!(labeled.last().unwrap().skill, "Invention");
    }
}
