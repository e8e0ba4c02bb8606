//! HTTP access to the hiscores lite endpoint.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::{
    cli::types::{Gamemode, PlayerName, Variant},
    error::{Result, RuneScoreError},
};

/// Host serving both the RS3 and OSRS hiscores.
pub const HISCORE_BASE_URL: &str = "http://services.runescape.com";

/// The upstream specifies no timeout; fail fast instead of hanging.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the lite-endpoint URL for a player on the selected board.
pub fn hiscore_url(player: &PlayerName, variant: Variant, gamemode: Gamemode) -> String {
    format!(
        "{HISCORE_BASE_URL}/m=hiscore{}{}/index_lite.ws?player={}",
        variant.url_suffix(),
        gamemode.url_suffix(),
        player
    )
}

pub fn build_client() -> Result<Client> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// Fetch the raw response body. One attempt, no retries.
///
/// The service answers 404 for unknown players; that maps to
/// [`RuneScoreError::PlayerNotFound`] so the caller can report the name.
pub async fn fetch_hiscores(
    client: &Client,
    player: &PlayerName,
    variant: Variant,
    gamemode: Gamemode,
) -> Result<String> {
    let url = hiscore_url(player, variant, gamemode);
    let res = client.get(&url).send().await?;
    if res.status() == StatusCode::NOT_FOUND {
        return Err(RuneScoreError::PlayerNotFound {
            name: player.to_string(),
        });
    }
    Ok(res.error_for_status()?.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> PlayerName {
        PlayerName::new(raw).unwrap()
    }

    #[test]
    fn test_rs3_url() {
        assert_eq!(
            hiscore_url(&name("Zezima"), Variant::Rs3, Gamemode::Normal),
            "http://services.runescape.com/m=hiscore/index_lite.ws?player=Zezima"
        );
    }

    #[test]
    fn test_osrs_url() {
        assert_eq!(
            hiscore_url(&name("Zezima"), Variant::OldSchool, Gamemode::Normal),
            "http://services.runescape.com/m=hiscore_oldschool/index_lite.ws?player=Zezima"
        );
    }

    #[test]
    fn test_gamemode_suffix_follows_variant_suffix() {
        assert_eq!(
            hiscore_url(&name("Zezima"), Variant::OldSchool, Gamemode::Ultimate),
            "http://services.runescape.com/m=hiscore_oldschool_ultimate/index_lite.ws?player=Zezima"
        );
        assert_eq!(
            hiscore_url(&name("Zezima"), Variant::Rs3, Gamemode::Ironman),
            "http://services.runescape.com/m=hiscore_ironman/index_lite.ws?player=Zezima"
        );
    }

    #[test]
    fn test_url_uses_normalized_name() {
        let url = hiscore_url(&name("Iron Man"), Variant::Rs3, Gamemode::Normal);
        assert!(url.ends_with("player=Iron_Man"));
    }
}
