use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        discord::{DiscordGuild, DiscordUser},
        user::AuthenticatedUser,
    },
    state::OAuth2Client,
};

/// Base URL of the Discord REST API used for OAuth-scoped lookups.
const DISCORD_API_URL: &str = "https://discord.com/api/v10";

type DiscordToken = StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>;

/// Service for the Discord OAuth2 login flow.
///
/// Builds the authorization URL, exchanges the callback code for an access token, and
/// fetches the operator's identity and guild list with that token. Nothing is persisted;
/// the resulting `AuthenticatedUser` is stored in the session by the caller.
pub struct AuthService<'a> {
    /// HTTP client for Discord API requests.
    pub http_client: &'a reqwest::Client,
    /// OAuth2 client for Discord authentication flow.
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `http_client` - Reference to the HTTP client for Discord API requests
    /// - `oauth_client` - Reference to the configured OAuth2 client
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(http_client: &'a reqwest::Client, oauth_client: &'a OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// Requests the `identify` and `guilds` scopes. Returns both the URL and the CSRF token
    /// the callback must echo back.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Tuple containing the authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .url()
    }

    /// Handles the OAuth2 callback and resolves the operator.
    ///
    /// Exchanges the authorization code for an access token, then fetches the user and their
    /// guild list from Discord. The user is an owner when their ID is in `owner_ids`.
    ///
    /// # Arguments
    /// - `authorization_code` - OAuth2 authorization code from the Discord callback
    /// - `owner_ids` - Discord user IDs granted owner rights
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Operator identity, guilds, and owner flag
    /// - `Err(AppError::AuthErr(TokenExchange))` - The code could not be exchanged
    /// - `Err(AppError::ReqwestErr)` - Fetching user data from Discord failed
    /// - `Err(AppError::InternalErr)` - Discord returned a malformed user ID
    pub async fn callback(
        &self,
        authorization_code: String,
        owner_ids: &[u64],
    ) -> Result<AuthenticatedUser, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let user = self.fetch_discord_user(&token).await?;
        let guilds = self.fetch_user_guilds(&token).await?;
        let is_owner = owner_ids.contains(&user.id()?);

        if is_owner {
            tracing::info!("Owner {} logged in", user.username);
        }

        Ok(AuthenticatedUser {
            user,
            guilds,
            is_owner,
        })
    }

    /// Retrieves the authenticated user's Discord profile from `/users/@me`.
    async fn fetch_discord_user(&self, token: &DiscordToken) -> Result<DiscordUser, AppError> {
        let user = self
            .http_client
            .get(format!("{}/users/@me", DISCORD_API_URL))
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user)
    }

    /// Retrieves the guilds the user belongs to from `/users/@me/guilds`.
    async fn fetch_user_guilds(&self, token: &DiscordToken) -> Result<Vec<DiscordGuild>, AppError> {
        let guilds = self
            .http_client
            .get(format!("{}/users/@me/guilds", DISCORD_API_URL))
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<DiscordGuild>>()
            .await?;

        Ok(guilds)
    }
}
