//! Entry point: parse CLI, resolve the player name, run the pipeline.

use clap::Parser;
use runescore::{
    cli::RuneScore,
    commands::{
        hiscores::{handle_hiscores, validate_board, HiscoresParams},
        prompt_player_name, resolve_player_name,
    },
};

#[tokio::main]
async fn main() {
    let app = RuneScore::parse();

    if let Err(e) = run(app).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(app: RuneScore) -> runescore::Result<()> {
    let variant = app.variant();
    let gamemode = app.gamemode();
    // Check the flags before possibly prompting for a name.
    validate_board(variant, gamemode)?;

    let player_name = match resolve_player_name(app.player_name.clone())? {
        Some(name) => name,
        None => prompt_player_name()?,
    };

    handle_hiscores(HiscoresParams {
        player_name,
        variant,
        gamemode,
        as_json: app.json,
        debug: app.debug,
    })
    .await
}
