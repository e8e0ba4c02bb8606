//! Hiscores retrieval and output.
//!
//! The whole run is one linear pipeline: fetch the lite-text body, decode
//! it into skill records, then either write the HTML table to
//! `hiscores/<player>.html` or print the labeled records as JSON.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    cli::types::{Gamemode, PlayerName, Variant},
    error::{Result, RuneScoreError},
    hiscores::{
        http::{build_client, fetch_hiscores, hiscore_url},
        parse::parse_hiscores,
        skills::label_skills,
    },
    render::render_table,
};

/// Directory the HTML files are written to, relative to the working dir.
pub const OUTPUT_DIR: &str = "hiscores";

/// Options for a single hiscores run.
#[derive(Debug)]
pub struct HiscoresParams {
    pub player_name: PlayerName,
    pub variant: Variant,
    pub gamemode: Gamemode,
    pub as_json: bool,
    pub debug: bool,
}

/// Fetch, decode, and emit one player's hiscores.
///
/// # Errors
///
/// Returns an error if:
/// - Ultimate Ironman is requested on the RS3 hiscores
/// - the request fails, times out, or the player is unknown
/// - the body decodes to zero skill rows
/// - the response carries more skill rows than names are known for
pub async fn handle_hiscores(params: HiscoresParams) -> Result<()> {
    validate_board(params.variant, params.gamemode)?;

    let client = build_client()?;
    if params.debug {
        eprintln!(
            "GET {}",
            hiscore_url(&params.player_name, params.variant, params.gamemode)
        );
    }

    let body = fetch_hiscores(&client, &params.player_name, params.variant, params.gamemode)
        .await?;
    let records = parse_hiscores(&body);
    if records.is_empty() {
        return Err(RuneScoreError::EmptyResponse);
    }

    if params.as_json {
        let labeled = label_skills(&records)?;
        println!("{}", serde_json::to_string_pretty(&labeled)?);
        return Ok(());
    }

    let html = render_table(&records, params.variant, params.gamemode)?;
    let path = write_html(Path::new(OUTPUT_DIR), &params.player_name, &html)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Reject board combinations the service never ran.
///
/// RS3 has no Ultimate Ironman board. Called before the name prompt so
/// bad flags fail without any interaction.
pub fn validate_board(variant: Variant, gamemode: Gamemode) -> Result<()> {
    if variant == Variant::Rs3 && gamemode == Gamemode::Ultimate {
        return Err(RuneScoreError::UltimateRequiresOsrs);
    }
    Ok(())
}

/// Write the rendered table to `<dir>/<lowercased name>.html`.
///
/// Creates the directory if missing; the write is a single
/// open-write-close.
pub fn write_html(dir: &Path, player: &PlayerName, html: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.html", player.file_stem()));
    fs::write(&path, html)?;
    Ok(path)
}
