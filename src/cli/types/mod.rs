//! Typed CLI values.

pub mod player;
pub mod variant;

pub use player::PlayerName;
pub use variant::{Gamemode, Variant};
