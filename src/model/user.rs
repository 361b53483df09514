use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::discord::{DiscordGuildDto, DiscordUserDto};

/// The logged-in operator as returned by `/auth/me`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserDto {
    pub user: DiscordUserDto,
    pub guilds: Vec<DiscordGuildDto>,
    pub is_owner: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GuildListDto {
    pub guilds: Vec<DiscordGuildDto>,
}
