//! RuneScore CLI Library
//!
//! Fetches a RuneScape player's hiscores from Jagex' public lite-text
//! endpoint and renders them as an HTML table.
//!
//! ## Features
//!
//! - **Both leaderboards**: RS3 by default, Old School via `--osrs`
//! - **Gamemode rankings**: ironman, ultimate ironman, and hardcore boards
//! - **HTML output**: writes `hiscores/<player>.html` ready for embedding
//! - **JSON output**: `--json` prints the labeled skill table to stdout
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use runescore::{
//!     commands::hiscores::{handle_hiscores, HiscoresParams},
//!     Gamemode, PlayerName, Variant,
//! };
//!
//! # async fn example() -> runescore::Result<()> {
//! handle_hiscores(HiscoresParams {
//!     player_name: PlayerName::new("Diapolo 10")?,
//!     variant: Variant::OldSchool,
//!     gamemode: Gamemode::Normal,
//!     as_json: false,
//!     debug: false,
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set a default player to avoid passing `--player-name` every run:
//! ```bash
//! export RUNESCORE_PLAYER="Diapolo 10"
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod hiscores;
pub mod render;

// Re-export commonly used types
pub use cli::types::{Gamemode, PlayerName, Variant};
pub use error::{Result, RuneScoreError};
pub use hiscores::types::{LabeledSkill, SkillRecord};

pub const PLAYER_NAME_ENV_VAR: &str = "RUNESCORE_PLAYER";
