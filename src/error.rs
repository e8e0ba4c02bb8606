//! Error types for the RuneScore CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuneScoreError>;

#[derive(Error, Debug)]
pub enum RuneScoreError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("player name must not be empty")]
    EmptyPlayerName,

    #[error("no hiscores found for player: {name}")]
    PlayerNotFound { name: String },

    #[error("hiscores response contained no skill rows")]
    EmptyResponse,

    #[error("response has {rows} skill rows but only {known} skill names are known")]
    UnknownSkillRows { rows: usize, known: usize },

    #[error("RS3 does not have Ultimate Ironman mode")]
    UltimateRequiresOsrs,
}
