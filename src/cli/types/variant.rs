//! Leaderboard variant and account gamemode selectors.

use std::fmt;

/// Which leaderboard to query: the current game or the legacy ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Rs3,
    OldSchool,
}

impl Variant {
    /// Suffix spliced into the `m=hiscore...` URL segment.
    pub fn url_suffix(&self) -> &'static str {
        match self {
            Variant::Rs3 => "",
            Variant::OldSchool => "_oldschool",
        }
    }

    /// Name shown in the table caption.
    pub fn caption(&self) -> &'static str {
        match self {
            Variant::Rs3 => "RS3",
            Variant::OldSchool => "OSRS",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.caption())
    }
}

/// Account ranking board within a variant.
///
/// `Ultimate` exists only on the OSRS hiscores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Gamemode {
    #[default]
    Normal,
    Ironman,
    Ultimate,
    Hardcore,
}

impl Gamemode {
    /// Suffix spliced into the `m=hiscore...` URL segment, after the variant's.
    pub fn url_suffix(&self) -> &'static str {
        match self {
            Gamemode::Normal => "",
            Gamemode::Ironman => "_ironman",
            Gamemode::Ultimate => "_ultimate",
            Gamemode::Hardcore => "_hardcore",
        }
    }

    /// Label used in the HTML comment.
    pub fn label(&self) -> &'static str {
        match self {
            Gamemode::Normal => "normal",
            Gamemode::Ironman => "ironman",
            Gamemode::Ultimate => "UIM",
            Gamemode::Hardcore => "HCIM",
        }
    }
}

impl fmt::Display for Gamemode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
