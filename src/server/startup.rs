use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` and falls back to `info` when it is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Creates the session layer backed by an in-memory store.
///
/// Sessions expire after 7 days of inactivity. Cookies are only marked `Secure` in
/// production so local logins over plain HTTP keep working.
///
/// # Arguments
/// - `config` - Application configuration providing the cookie security flag
///
/// # Returns
/// - `SessionManagerLayer<MemoryStore>` - Layer to attach to the router
pub fn setup_session_layer(config: &Config) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.secure_cookies)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}

/// Creates a CORS layer allowing any origin.
pub fn setup_cors_layer() -> CorsLayer {
    use axum::http::{header, Method};

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Creates an HTTP client for Discord API requests.
///
/// Redirects are disabled, as the OAuth2 token exchange requires to prevent SSRF.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - The TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Creates the OAuth2 client for Discord authentication.
///
/// # Arguments
/// - `config` - Application configuration with Discord credentials and endpoints
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorization, token, and redirect URLs set
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - One of the URLs is malformed
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone())
        .map_err(|e| invalid_url("DISCORD_AUTH_URL", &config.discord_auth_url, e))?;
    let token_url = TokenUrl::new(config.discord_token_url.clone())
        .map_err(|e| invalid_url("DISCORD_TOKEN_URL", &config.discord_token_url, e))?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone()).map_err(|e| {
        invalid_url("DASHBOARD_CALLBACK_URL", &config.discord_redirect_url, e)
    })?;

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

fn invalid_url(name: &str, value: &str, err: url::ParseError) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: err.to_string(),
    }
}
