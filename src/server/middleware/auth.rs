use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::AuthenticatedUser,
};

pub enum Permission {
    /// MANAGE_GUILD in the given guild, or owner status with membership in it.
    ManageGuild(u64),
}

pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Resolves the logged-in operator and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - The operator holds every permission
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::GuildAccessDenied)` - The first permission the operator lacks
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<AuthenticatedUser, AppError> {
        let Some(user) = AuthSession::new(self.session).get_user().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        for permission in permissions {
            match permission {
                Permission::ManageGuild(guild_id) => {
                    if user.find_manageable_guild(*guild_id)?.is_none() {
                        return Err(AuthError::GuildAccessDenied {
                            user_id: user.user.id.clone(),
                            guild_id: *guild_id,
                        }
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
