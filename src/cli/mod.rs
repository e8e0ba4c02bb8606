//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use types::{Gamemode, PlayerName, Variant};

#[derive(Debug, Parser)]
#[clap(
    name = "runescore",
    about = "Fetch a RuneScape player's hiscores and format them as an HTML table",
    version
)]
pub struct RuneScore {
    /// Player to look up (or set `RUNESCORE_PLAYER` env var; prompts if absent).
    #[clap(long, short = 'n')]
    pub player_name: Option<PlayerName>,

    /// Use the Old School RuneScape hiscores instead of the RS3 ones.
    #[clap(long, alias = "oldschool")]
    pub osrs: bool,

    /// Rank on the ironman hiscores.
    #[clap(long, group = "gamemode")]
    pub ironman: bool,

    /// Rank on the ultimate ironman hiscores (OSRS only).
    #[clap(long, visible_alias = "uim", alias = "ultimate-ironman", group = "gamemode")]
    pub ultimate: bool,

    /// Rank on the hardcore ironman hiscores.
    #[clap(long, visible_alias = "hcim", alias = "hardcore-ironman", group = "gamemode")]
    pub hardcore: bool,

    /// Print the labeled skill table as JSON instead of writing an HTML file.
    #[clap(long)]
    pub json: bool,

    /// Print the request URL before fetching.
    #[clap(long)]
    pub debug: bool,
}

impl RuneScore {
    /// Which leaderboard the flags select.
    pub fn variant(&self) -> Variant {
        if self.osrs {
            Variant::OldSchool
        } else {
            Variant::Rs3
        }
    }

    /// Which account ranking the flags select.
    ///
    /// The gamemode flags are a clap group, so at most one is set.
    pub fn gamemode(&self) -> Gamemode {
        if self.ironman {
            Gamemode::Ironman
        } else if self.ultimate {
            Gamemode::Ultimate
        } else if self.hardcore {
            Gamemode::Hardcore
        } else {
            Gamemode::Normal
        }
    }
}
