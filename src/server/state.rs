//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - HTTP client for Discord API requests
//! - OAuth2 client for Discord authentication
//! - Feature index cache for the documentation endpoint
//! - Command root and owner list from configuration
//! - Application URL reported by the health check

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use std::{path::PathBuf, sync::Arc};

use super::service::feature::cache::FeatureCacheService;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `FeatureCacheService` shares its slot between clones
/// - `Arc<PathBuf>` and `Arc<[u64]>` are reference-counted
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for making external API requests.
    ///
    /// Configured without redirect following, as the OAuth2 token exchange requires.
    pub http_client: reqwest::Client,

    /// OAuth2 client for Discord authentication flow.
    pub oauth_client: OAuth2Client,

    /// Cache serving the feature index.
    pub feature_cache: FeatureCacheService,

    /// Command root scanned by the uncached command listing.
    pub commands_dir: Arc<PathBuf>,

    /// Discord user IDs granted owner rights.
    pub owner_ids: Arc<[u64]>,

    /// Application base URL reported by the health check.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for Discord authentication
    /// - `commands_dir` - Command root for the feature index and command listing
    /// - `owner_ids` - Discord user IDs granted owner rights
    /// - `app_url` - Application base URL
    ///
    /// # Returns
    /// - `AppState` - Initialized application state with an empty index cache
    pub fn new(
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        commands_dir: PathBuf,
        owner_ids: Vec<u64>,
        app_url: String,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            feature_cache: FeatureCacheService::new(commands_dir.clone()),
            commands_dir: Arc::new(commands_dir),
            owner_ids: owner_ids.into(),
            app_url,
        }
    }
}
