//! HTML table rendering.

use crate::{
    cli::types::{Gamemode, Variant},
    error::Result,
    hiscores::{skills::label_skills, types::SkillRecord},
};

/// Render the skill table as an HTML fragment.
///
/// Records arrive in upstream order (rank, level, experience) but the
/// display columns are Skill, Level, XP, Rank. Tabs and newlines are for
/// human readability only.
pub fn render_table(
    records: &[SkillRecord],
    variant: Variant,
    gamemode: Gamemode,
) -> Result<String> {
    let labeled = label_skills(records)?;

    let mut html = String::from("<table class='hiscores'>");
    html.push_str(&format!("\n\t<!-- Using {gamemode} ranking -->"));
    html.push_str(&format!("\n\t<caption>My hiscores in {variant}</caption>"));
    html.push_str("\n\t<tr>\n\t\t<th>Skill</th>\n\t\t<th>Level</th>\n\t\t<th>XP</th>\n\t\t<th>Rank</th>\n\t</tr>");

    for row in &labeled {
        html.push_str("\n\t<tr>");
        for cell in [
            row.skill,
            row.record.level.as_str(),
            row.record.experience.as_str(),
            row.record.rank.as_str(),
        ] {
            html.push_str(&format!("\n\t\t<td>{cell}</td>"));
        }
        html.push_str("\n\t</tr>");
    }

    html.push_str("\n</table>");
    Ok(html)
}
