//! `/account` resource

use serde::Deserialize;

/// Response body of `GET /account`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub gamertag: String,
    pub gamerscore: i64,
    #[serde(default)]
    pub account_tier: Option<String>,
    #[serde(default)]
    pub reputation: Option<String>,
    #[serde(default)]
    pub gamer_picture_url: Option<String>,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

crate::xbl_endpoint!(AccountDto => "/account");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_account_parses() {
        let dto: AccountDto = serde_json::from_value(json!({
            "gamertag": "Foo",
            "gamerscore": 1000,
            "accountTier": "Gold"
        }))
        .unwrap();

        assert_eq!(dto.gamertag, "Foo");
        assert_eq!(dto.gamerscore, 1000);
        assert_eq!(dto.account_tier.as_deref(), Some("Gold"));
        assert!(dto.bio.is_none());
    }

    #[test]
    fn test_missing_gamertag_is_rejected() {
        let result = serde_json::from_value::<AccountDto>(json!({ "gamerscore": 10 }));
        assert!(result.is_err());
    }
}
