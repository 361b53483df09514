use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, user::CurrentUserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession},
        },
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
///
/// Both are optional so a denied consent (which returns neither) can be redirected
/// instead of rejected by the extractor.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: Option<String>,
    /// Authorization code from Discord for token exchange.
    pub code: Option<String>,
}

/// Start the Discord OAuth2 login flow.
///
/// Stores a fresh CSRF token in the session and redirects to Discord's consent screen
/// requesting the `identify` and `guilds` scopes.
///
/// # Returns
/// - `307 Temporary Redirect` - Redirect to Discord
/// - `500 Internal Server Error` - Failed to write the session
#[utoipa::path(
    get,
    path = "/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Discord's OAuth2 consent screen"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete the Discord OAuth2 login flow.
///
/// Validates the CSRF state, exchanges the code, and stores the operator with their
/// guilds and owner flag in the session. Failures after CSRF validation redirect back to
/// the dashboard with an `error` query parameter.
///
/// # Returns
/// - `303 See Other` - Redirect to `/` on success, or `/?error=no_code|token_failed|auth_failed`
/// - `400 Bad Request` - CSRF state mismatch
#[utoipa::path(
    get,
    path = "/auth/callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 303, description = "Redirect back to the dashboard"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let Some(code) = params.code else {
        return Ok(Redirect::to("/?error=no_code"));
    };

    CsrfSession::new(&session)
        .validate(params.state.as_deref().unwrap_or_default())
        .await?;

    let auth_service = AuthService::new(&state.http_client, &state.oauth_client);
    let user = match auth_service.callback(code, &state.owner_ids).await {
        Ok(user) => user,
        Err(AppError::AuthErr(AuthError::TokenExchange(reason))) => {
            tracing::warn!("Discord token exchange failed: {}", reason);
            return Ok(Redirect::to("/?error=token_failed"));
        }
        Err(err) => {
            tracing::error!("Discord login failed: {}", err);
            return Ok(Redirect::to("/?error=auth_failed"));
        }
    };

    AuthSession::new(&session).set_user(&user).await?;
    tracing::debug!("User {} logged in", user.user.username);

    Ok(Redirect::to("/"))
}

/// Log out by clearing the session.
#[utoipa::path(
    get,
    path = "/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Session cleared, redirect to the dashboard")
    ),
)]
pub async fn logout(session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    Redirect::to("/")
}

/// Get the logged-in operator.
///
/// # Access Control
/// - `Authenticated` - Any logged-in operator
///
/// # Returns
/// - `200 OK` - The operator, their guilds, and owner flag
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged-in operator", body = CurrentUserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(session: Session) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session).require(&[]).await?;

    Ok(Json(user.to_dto()))
}
