use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::{AuthSession, CsrfSession},
    },
    model::{
        discord::{DiscordGuild, DiscordUser},
        user::AuthenticatedUser,
    },
};
use test_utils::builder::TestBuilder;

mod auth;

/// MANAGE_GUILD alone, as Discord reports it.
const MANAGE: &str = "32";
/// SEND_MESSAGES and VIEW_CHANNEL without MANAGE_GUILD.
const MEMBER: &str = "3072";

fn guild(id: &str, permissions: &str) -> DiscordGuild {
    DiscordGuild {
        id: id.to_string(),
        name: format!("Guild {id}"),
        icon: None,
        owner: false,
        permissions: permissions.to_string(),
    }
}

fn operator(guilds: Vec<DiscordGuild>, is_owner: bool) -> AuthenticatedUser {
    AuthenticatedUser {
        user: DiscordUser {
            id: "123456789".to_string(),
            username: "operator".to_string(),
            global_name: Some("Operator".to_string()),
            avatar: None,
        },
        guilds,
        is_owner,
    }
}
