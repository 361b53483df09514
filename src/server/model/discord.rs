//! Discord API models.
//!
//! Partial user and guild objects as returned by Discord's OAuth-scoped REST endpoints
//! (`/users/@me`, `/users/@me/guilds`). They are stored in the session after login, so they
//! serialize back to the same shape they were read from.

use serde::{Deserialize, Serialize};

use crate::{
    model::discord::{DiscordGuildDto, DiscordUserDto},
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// MANAGE_GUILD permission bit.
pub const MANAGE_GUILD: u64 = 0x20;

const DISCORD_CDN_URL: &str = "https://cdn.discordapp.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl DiscordUser {
    /// Parses the user's snowflake ID.
    pub fn id(&self) -> Result<u64, AppError> {
        parse_u64_from_string(&self.id)
    }

    pub fn to_dto(&self) -> DiscordUserDto {
        DiscordUserDto {
            id: self.id.clone(),
            username: self.username.clone(),
            global_name: self.global_name.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordGuild {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    /// Permission bit set of the user in this guild, as a decimal string.
    pub permissions: String,
}

impl DiscordGuild {
    /// Checks whether the user holds MANAGE_GUILD in this guild.
    ///
    /// # Returns
    /// - `Ok(true)` - The permission bit is set
    /// - `Ok(false)` - The permission bit is not set
    /// - `Err(AppError::InternalErr(ParseStringId))` - Discord sent a non-numeric bit set
    pub fn can_manage(&self) -> Result<bool, AppError> {
        let permissions = parse_u64_from_string(&self.permissions)?;
        Ok(permissions & MANAGE_GUILD == MANAGE_GUILD)
    }

    /// Full CDN URL of the guild icon, if the guild has one.
    pub fn icon_url(&self) -> Option<String> {
        self.icon
            .as_ref()
            .map(|hash| format!("{}/icons/{}/{}.png", DISCORD_CDN_URL, self.id, hash))
    }

    pub fn to_dto(&self) -> DiscordGuildDto {
        DiscordGuildDto {
            id: self.id.clone(),
            name: self.name.clone(),
            icon: self.icon_url(),
            owner: self.owner,
            permissions: self.permissions.clone(),
        }
    }
}
