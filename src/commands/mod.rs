//! Command implementations for the RuneScore CLI

pub mod hiscores;

use std::io::{self, BufRead, Write};

use crate::{cli::types::PlayerName, error::Result, PLAYER_NAME_ENV_VAR};

/// Resolve the player name from the CLI flag or `RUNESCORE_PLAYER`.
///
/// Returns `Ok(None)` when neither is set; the caller should prompt.
pub fn resolve_player_name(cli_value: Option<PlayerName>) -> Result<Option<PlayerName>> {
    if let Some(name) = cli_value {
        return Ok(Some(name));
    }
    match std::env::var(PLAYER_NAME_ENV_VAR) {
        Ok(raw) => Ok(Some(PlayerName::new(&raw)?)),
        Err(_) => Ok(None),
    }
}

/// Ask for a username on stdin, the interactive fallback.
pub fn prompt_player_name() -> Result<PlayerName> {
    print!("Username: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    PlayerName::new(&line)
}
