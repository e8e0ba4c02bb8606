//! End-to-end decoding and rendering tests on a canned response body

use runescore::{
    hiscores::{parse::parse_hiscores, skills::label_skills},
    render::render_table,
    Gamemode, Variant,
};
use serde_json::json;

/// A trimmed OSRS-style body: skill rows first, then minigame rows the
/// parser is expected to drop.
const BODY: &str = "\
77143,1847,62695241
111395,80,2084814
125500,78,1727216
103227,85,3268791
97130,87,4090549
146444,75,1254229
142208,70,777927
134859,82,2463041
12,99,200000000
-1,-1,-1
240542,1196
-1,-1
";

#[test]
fn test_parse_drops_minigame_rows() {
    let records = parse_hiscores(BODY);
    assert_eq!(records.len(), 10);
    assert_eq!(records[0].rank, "77143");
    assert_eq!(records[0].level, "1847");
    assert_eq!(records[0].experience, "62695241");
}

#[test]
fn test_unranked_skill_passes_through_to_html() {
    let records = parse_hiscores(BODY);
    let html = render_table(&records, Variant::OldSchool, Gamemode::Normal).unwrap();
    assert!(html.contains("<td>-1</td>"));
}

#[test]
fn test_pipeline_renders_expected_fragment() {
    let records = parse_hiscores(BODY);
    let html = render_table(&records, Variant::OldSchool, Gamemode::Ironman).unwrap();

    assert!(html.starts_with("<table class='hiscores'>"));
    assert!(html.contains("<!-- Using ironman ranking -->"));
    assert!(html.contains("<caption>My hiscores in OSRS</caption>"));
    // First data row is the Total aggregate in display order Level/XP/Rank.
    assert!(html.contains(
        "<td>Total</td>\n\t\t<td>1847</td>\n\t\t<td>62695241</td>\n\t\t<td>77143</td>"
    ));
    assert!(html.ends_with("\n</table>"));
}

#[test]
fn test_row_count_matches_record_count() {
    let records = parse_hiscores(BODY);
    let html = render_table(&records, Variant::Rs3, Gamemode::Normal).unwrap();
    let data_rows = html.matches("<tr>").count() - 1; // minus the header row
    assert_eq!(data_rows, records.len());
}

#[test]
fn test_labeled_records_serialize_flat() {
    let records = parse_hiscores("12,99,200000000\n");
    let labeled = label_skills(&records).unwrap();

    let value = serde_json::to_value(&labeled).unwrap();
    assert_eq!(
        value,
        json!([{
            "skill": "Total",
            "rank": "12",
            "level": "99",
            "experience": "200000000",
        }])
    );
}
