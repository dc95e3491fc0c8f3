//! `/achievements` resource (title history of the key holder)

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TitleDto {
    pub name: String,
}

/// Response body of `GET /achievements`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TitleHistoryDto {
    #[serde(default)]
    pub titles: Vec<TitleDto>,
}

crate::xbl_endpoint!(TitleHistoryDto => "/achievements");
