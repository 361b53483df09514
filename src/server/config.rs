use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_COMMANDS_DIR: &str = "src/commands";
const DEFAULT_DOCS_DIR: &str = "docsweb";
const DEFAULT_CALLBACK_URL: &str = "http://localhost:3000/auth/callback";

pub struct Config {
    pub port: u16,
    pub app_url: String,

    pub commands_dir: PathBuf,
    pub docs_dir: PathBuf,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// Discord user IDs granted owner rights over every guild.
    pub owner_ids: Vec<u64>,
    /// Whether session cookies are marked `Secure`.
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - The port or an owner ID failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let port = match lookup("DASHBOARD_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "DASHBOARD_PORT".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        let owner_ids = match lookup("OWNER_IDS") {
            Some(value) => parse_owner_ids(&value)?,
            None => Vec::new(),
        };

        Ok(Self {
            port,
            app_url: lookup("APP_URL").unwrap_or_else(|| format!("http://localhost:{port}")),
            commands_dir: lookup("COMMANDS_DIR")
                .unwrap_or_else(|| DEFAULT_COMMANDS_DIR.to_string())
                .into(),
            docs_dir: lookup("DOCS_DIR")
                .unwrap_or_else(|| DEFAULT_DOCS_DIR.to_string())
                .into(),
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: lookup("DASHBOARD_CALLBACK_URL")
                .unwrap_or_else(|| DEFAULT_CALLBACK_URL.to_string()),
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            owner_ids,
            secure_cookies: lookup("APP_ENV").as_deref() == Some("production"),
        })
    }
}

/// Parses a comma separated list of Discord user IDs, ignoring blank entries.
fn parse_owner_ids(value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "OWNER_IDS".to_string(),
                value: value.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}
