use axum::{extract::Path, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, discord::DiscordGuildDto, user::GuildListDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::discord::DiscordGuild,
    },
};

/// Tag for grouping guild endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

/// List the guilds the operator can manage.
///
/// # Access Control
/// - `Authenticated` - Any logged-in operator; only guilds with MANAGE_GUILD are listed
///
/// # Returns
/// - `200 OK` - Guilds in which the operator holds MANAGE_GUILD
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/guilds",
    tag = GUILD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved manageable guilds", body = GuildListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guilds(session: Session) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session).require(&[]).await?;

    let guilds = user
        .manageable_guilds()?
        .into_iter()
        .map(DiscordGuild::to_dto)
        .collect();

    Ok(Json(GuildListDto { guilds }))
}

/// Get a single guild the operator can manage.
///
/// # Access Control
/// - `ManageGuild` - MANAGE_GUILD in the guild, or owner status with membership in it
///
/// # Arguments
/// - `session` - User's session for authentication
/// - `guild_id` - Discord guild ID
///
/// # Returns
/// - `200 OK` - The guild
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - No permission to manage the guild
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved guild", body = DiscordGuildDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "No permission to manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild(
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session)
        .require(&[Permission::ManageGuild(guild_id)])
        .await?;

    let guild = user
        .find_manageable_guild(guild_id)?
        .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", guild_id)))?;

    Ok(Json(guild.to_dto()))
}
