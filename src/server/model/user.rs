//! Authenticated operator domain model.
//!
//! Holds what the OAuth callback learned about the operator: their Discord identity, the
//! guilds they belong to, and whether they are a configured owner. The whole value lives in
//! the session for the lifetime of the login.

use serde::{Deserialize, Serialize};

use crate::{
    model::user::CurrentUserDto,
    server::{
        error::AppError,
        model::discord::{DiscordGuild, DiscordUser},
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user: DiscordUser,
    pub guilds: Vec<DiscordGuild>,
    pub is_owner: bool,
}

impl AuthenticatedUser {
    /// Guilds in which the user holds MANAGE_GUILD.
    ///
    /// # Returns
    /// - `Ok(Vec<&DiscordGuild>)` - Manageable guilds in the order Discord returned them
    /// - `Err(AppError::InternalErr(ParseStringId))` - A guild had a malformed permission set
    pub fn manageable_guilds(&self) -> Result<Vec<&DiscordGuild>, AppError> {
        let mut guilds = Vec::new();
        for guild in &self.guilds {
            if guild.can_manage()? {
                guilds.push(guild);
            }
        }
        Ok(guilds)
    }

    /// Finds a guild the user may manage, either through MANAGE_GUILD or owner status.
    ///
    /// Owners still need to be a member of the guild for it to be found.
    ///
    /// # Returns
    /// - `Ok(Some(guild))` - The user may manage the guild
    /// - `Ok(None)` - The user is not in the guild or lacks permission
    /// - `Err(AppError::InternalErr(ParseStringId))` - The guild had a malformed permission set
    pub fn find_manageable_guild(&self, guild_id: u64) -> Result<Option<&DiscordGuild>, AppError> {
        let guild_id = guild_id.to_string();
        let Some(guild) = self.guilds.iter().find(|guild| guild.id == guild_id) else {
            return Ok(None);
        };

        if self.is_owner || guild.can_manage()? {
            return Ok(Some(guild));
        }

        Ok(None)
    }

    pub fn to_dto(&self) -> CurrentUserDto {
        CurrentUserDto {
            user: self.user.to_dto(),
            guilds: self.guilds.iter().map(DiscordGuild::to_dto).collect(),
            is_owner: self.is_owner,
        }
    }
}
