use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The user lacks MANAGE_GUILD on the requested guild and is not an owner.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} attempted to manage guild {guild_id} without permission")]
    GuildAccessDenied {
        /// Discord ID of the requesting user
        user_id: String,
        /// Guild the user attempted to access
        guild_id: u64,
    },

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code for an access token failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `UserNotInSession` → 401 Unauthorized with "Authentication required"
/// - `GuildAccessDenied` → 403 Forbidden with "No permission to manage this guild"
/// - `CsrfValidationFailed` → 400 Bad Request with "There was an issue logging you in"
/// - `TokenExchange` → 502 Bad Gateway with a generic message
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::GuildAccessDenied { .. } => {
                (StatusCode::FORBIDDEN, "No permission to manage this guild")
            }
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::TokenExchange(_) => (StatusCode::BAD_GATEWAY, "Failed to log in with Discord"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
