//! Player name handling.

use crate::error::{Result, RuneScoreError};
use std::fmt;
use std::str::FromStr;

/// A player name in URL-safe form.
///
/// The hiscores URLs are space-intolerant, so every space and hyphen is
/// replaced with an underscore at construction. The wrapped string is
/// guaranteed non-empty.
///
/// # Examples
///
/// ```rust
/// use runescore::PlayerName;
///
/// let name = PlayerName::new("Iron Man").unwrap();
/// assert_eq!(name.as_str(), "Iron_Man");
/// assert_eq!(name.file_stem(), "iron_man");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    /// Normalize a raw name, rejecting empty input.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RuneScoreError::EmptyPlayerName);
        }
        Ok(Self(trimmed.replace([' ', '-'], "_")))
    }

    /// Get the normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used for the output filename.
    pub fn file_stem(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerName {
    type Err = RuneScoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
