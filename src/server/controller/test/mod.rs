use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext, fixture::CommandSource};
use tower::ServiceExt;

use crate::server::{
    config::Config,
    model::{
        discord::{DiscordGuild, DiscordUser},
        user::AuthenticatedUser,
    },
    router, startup,
    state::AppState,
};

mod auth;
mod guild;
mod health;

/// Builds the full application over the context's command and docs roots.
fn app(test: &TestContext) -> Router {
    let commands = test.commands_root().to_string_lossy().into_owned();
    let docs = test.docs_root().to_string_lossy().into_owned();
    let config = Config::from_lookup(move |name| match name {
        "DISCORD_CLIENT_ID" => Some("1234".to_string()),
        "DISCORD_CLIENT_SECRET" => Some("secret".to_string()),
        "APP_URL" => Some("https://dash.example.com".to_string()),
        "COMMANDS_DIR" => Some(commands.clone()),
        "DOCS_DIR" => Some(docs.clone()),
        _ => None,
    })
    .unwrap();

    let state = AppState::new(
        startup::setup_reqwest_client().unwrap(),
        startup::setup_oauth_client(&config).unwrap(),
        config.commands_dir.clone(),
        config.owner_ids.clone(),
        config.app_url.clone(),
    );

    router::app(state, &config)
}

/// Sends a GET request through the application.
async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: impl IntoResponse) -> Value {
    let bytes = to_bytes(response.into_response().into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

fn operator(guilds: Vec<DiscordGuild>, is_owner: bool) -> AuthenticatedUser {
    AuthenticatedUser {
        user: DiscordUser {
            id: "123456789".to_string(),
            username: "operator".to_string(),
            global_name: None,
            avatar: Some("a1b2".to_string()),
        },
        guilds,
        is_owner,
    }
}

fn guild(id: &str, permissions: &str) -> DiscordGuild {
    DiscordGuild {
        id: id.to_string(),
        name: format!("Guild {id}"),
        icon: Some("icon".to_string()),
        owner: false,
        permissions: permissions.to_string(),
    }
}
