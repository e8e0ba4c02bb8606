//! Lite-text response decoding.

use super::types::SkillRecord;

/// Decode the response body into skill records.
///
/// Every line is comma-separated; skill rows carry exactly three fields
/// (rank, level, experience). Lines with any other field count are the
/// minigame boards the renderer has no names for, and are dropped.
pub fn parse_hiscores(body: &str) -> Vec<SkillRecord> {
    body.lines()
        .filter_map(|line| {
            let mut fields = line.split(',');
            match (fields.next(), fields.next(), fields.next(), fields.next()) {
                (Some(rank), Some(level), Some(experience), None) => Some(SkillRecord {
                    rank: rank.to_string(),
                    level: level.to_string(),
                    experience: experience.to_string(),
                }),
                _ => None,
            }
        })
        .collect()
}
