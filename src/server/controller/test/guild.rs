use axum::extract::Path;

use super::*;
use crate::server::{
    controller::guild::{get_guild, get_guilds},
    middleware::session::AuthSession,
};

async fn logged_in(test: &mut TestContext, user: AuthenticatedUser) -> tower_sessions::Session {
    let session = test.session().clone();
    AuthSession::new(&session).set_user(&user).await.unwrap();
    session
}

/// Tests that guild listing requires a login.
///
/// Expected: 401 Unauthorized
#[tokio::test]
async fn guilds_require_login() {
    let test = TestBuilder::new().build().unwrap();
    let app = app(&test);

    let response = get(&app, "/api/guilds").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests that only guilds with MANAGE_GUILD are listed.
///
/// Expected: 200 with the manageable guild only
#[tokio::test]
async fn lists_manageable_guilds() {
    let mut test = TestBuilder::new().build().unwrap();
    let session = logged_in(
        &mut test,
        operator(vec![guild("42", "32"), guild("43", "1024")], false),
    )
    .await;

    let json = body_json(get_guilds(session).await).await;

    let guilds = json["guilds"].as_array().unwrap();
    assert_eq!(guilds.len(), 1);
    assert_eq!(guilds[0]["id"], "42");
}

/// Tests single guild access for managers, members, and owners.
///
/// Expected: 200 for MANAGE_GUILD, 403 for a plain member
#[tokio::test]
async fn guild_detail_checks_permission() {
    let mut test = TestBuilder::new().build().unwrap();
    let session = logged_in(
        &mut test,
        operator(vec![guild("42", "32"), guild("43", "1024")], false),
    )
    .await;

    let allowed = get_guild(session.clone(), Path(42)).await.into_response();
    assert_eq!(allowed.status(), StatusCode::OK);
    let json = body_json(allowed).await;
    assert_eq!(json["name"], "Guild 42");

    let denied = get_guild(session, Path(43)).await.into_response();
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);
    let json = body_json(denied).await;
    assert_eq!(json["error"], "No permission to manage this guild");
}

/// Tests that owners may open guilds they belong to without MANAGE_GUILD.
///
/// Expected: 200 OK
#[tokio::test]
async fn owner_opens_member_guild() {
    let mut test = TestBuilder::new().build().unwrap();
    let session = logged_in(&mut test, operator(vec![guild("43", "1024")], true)).await;

    let response = get_guild(session, Path(43)).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
}
