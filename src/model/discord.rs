use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscordUserDto {
    pub id: String,
    pub username: String,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DiscordGuildDto {
    pub id: String,
    pub name: String,
    /// Full CDN URL of the guild icon, if the guild has one.
    pub icon: Option<String>,
    pub owner: bool,
    /// Permission bit set of the user in this guild, as the decimal string Discord sends.
    pub permissions: String,
}
