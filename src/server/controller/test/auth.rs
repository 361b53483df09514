use super::*;
use crate::server::{
    controller::auth::{get_user, logout},
    middleware::session::AuthSession,
};

/// Tests that login redirects to Discord with a CSRF state and a session cookie.
///
/// Expected: 307 to the Discord authorize endpoint with `set-cookie`
#[tokio::test]
async fn login_redirects_to_discord() {
    let test = TestBuilder::new().build().unwrap();
    let app = app(&test);

    let response = get(&app, "/auth/login").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let target = location(&response);
    assert!(target.starts_with("https://discord.com/oauth2/authorize?"));
    assert!(target.contains("scope=identify+guilds"));
    assert!(target.contains("state="));
    assert!(response.headers().contains_key(header::SET_COOKIE));
}

/// Tests that a callback without a code redirects back with an error.
///
/// Expected: 303 to `/?error=no_code`
#[tokio::test]
async fn callback_without_code_redirects() {
    let test = TestBuilder::new().build().unwrap();
    let app = app(&test);

    let response = get(&app, "/auth/callback?error=access_denied").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?error=no_code");
}

/// Tests that a callback whose state was never issued is rejected.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn callback_rejects_unknown_state() {
    let test = TestBuilder::new().build().unwrap();
    let app = app(&test);

    let response = get(&app, "/auth/callback?code=abc&state=forged").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Tests that `/auth/me` requires a login.
///
/// Expected: 401 with "Authentication required"
#[tokio::test]
async fn me_requires_login() {
    let test = TestBuilder::new().build().unwrap();
    let app = app(&test);

    let response = get(&app, "/auth/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Authentication required");
}

/// Tests that `/auth/me` returns the stored operator.
///
/// Expected: 200 with user, guilds with icon URLs, and isOwner
#[tokio::test]
async fn me_returns_operator() {
    let mut test = TestBuilder::new().build().unwrap();
    let session = test.session().clone();
    AuthSession::new(&session)
        .set_user(&operator(vec![guild("42", "32")], true))
        .await
        .unwrap();

    let json = body_json(get_user(session).await).await;

    assert_eq!(json["user"]["id"], "123456789");
    assert_eq!(json["user"]["username"], "operator");
    assert!(json["user"]["globalName"].is_null());
    assert_eq!(json["isOwner"], true);
    assert_eq!(
        json["guilds"][0]["icon"],
        "https://cdn.discordapp.com/icons/42/icon.png"
    );
}

/// Tests that logout clears the session and redirects home.
///
/// Expected: 303 to `/` with no user left in the session
#[tokio::test]
async fn logout_clears_session() {
    let mut test = TestBuilder::new().build().unwrap();
    let session = test.session().clone();
    let auth = AuthSession::new(&session);
    auth.set_user(&operator(vec![], false)).await.unwrap();

    let response = logout(session.clone()).await.into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(auth.get_user().await.unwrap(), None);
}
