//! Gamer profile domain objects
//!
//! [`GamerProfile`] is the caller-facing view of the `/account` resource,
//! built by [`GamerProfile::from_account_dto`].

use crate::error::Result;
use crate::resource::{AccountDto, HttpMethod, TitleHistoryDto};
use crate::xbl::client::LiveClient;
use serde::Serialize;
use std::fmt;

/// Xbox Live membership tier
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(into = "String")]
pub enum AccountTier {
    Gold,
    /// Any tier string the API reports that has no dedicated variant
    Other(String),
    #[default]
    Unknown,
}

impl From<Option<String>> for AccountTier {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            None | Some("") => AccountTier::Unknown,
            Some("Gold") => AccountTier::Gold,
            Some(tier) => AccountTier::Other(tier.to_string()),
        }
    }
}

impl fmt::Display for AccountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountTier::Gold => f.write_str("Gold"),
            AccountTier::Other(tier) => f.write_str(tier),
            AccountTier::Unknown => f.write_str("Unknown"),
        }
    }
}

impl From<AccountTier> for String {
    fn from(tier: AccountTier) -> Self {
        tier.to_string()
    }
}

/// Player reputation as reported by the API
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct AccountReputation(pub String);

impl AccountReputation {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayedGame {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GamerProfile {
    pub gamertag: String,
    pub gamerscore: i64,
    pub account_tier: AccountTier,
    pub reputation: AccountReputation,
    pub gamer_picture_url: String,
    pub real_name: String,
    pub bio: String,
    pub location: String,
}

impl GamerProfile {
    /// Copy an `/account` response into a profile
    pub fn from_account_dto(dto: AccountDto) -> Self {
        Self {
            gamertag: dto.gamertag,
            gamerscore: dto.gamerscore,
            account_tier: AccountTier::from(dto.account_tier),
            reputation: AccountReputation(dto.reputation.unwrap_or_default()),
            gamer_picture_url: dto.gamer_picture_url.unwrap_or_default(),
            real_name: dto.real_name.unwrap_or_default(),
            bio: dto.bio.unwrap_or_default(),
            location: dto.location.unwrap_or_default(),
        }
    }

    /// Games this profile has played, in the order the API returns them.
    ///
    /// Fetched again on every call. The title history endpoint is scoped by
    /// the API key, so `client` must belong to the account this profile
    /// describes.
    pub async fn played_games(&self, client: &LiveClient) -> Result<Vec<PlayedGame>> {
        let history = client.request::<TitleHistoryDto>(HttpMethod::Get).await?;
        tracing::debug!("{} played {} titles", self.gamertag, history.titles.len());

        Ok(history
            .titles
            .into_iter()
            .map(|title| PlayedGame { name: title.name })
            .collect())
    }
}
