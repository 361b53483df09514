use axum::{handler::HandlerWithoutStateExt, response::Html, routing::get, Json, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    config::Config,
    controller::{auth, command, feature, guild, health},
    startup,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "AeroX Dashboard API"),
    tags(
        (name = "feature", description = "Command documentation index"),
        (name = "command", description = "Flat command listing"),
        (name = "auth", description = "Discord OAuth2 login"),
        (name = "guild", description = "Guilds the operator can manage"),
        (name = "health", description = "Liveness"),
    )
)]
struct ApiDoc;

/// Routes of the JSON API and the auth flow, with their OpenAPI document.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(feature::get_features))
        .routes(routes!(command::get_commands))
        .routes(routes!(health::health))
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(guild::get_guilds))
        .routes(routes!(guild::get_guild))
        .split_for_parts()
}

/// Builds the complete application.
///
/// API routes take precedence; every other path is served from the documentation
/// directory, falling back to a plain 404 page.
///
/// # Arguments
/// - `state` - Shared application state
/// - `config` - Configuration providing the docs directory and cookie settings
///
/// # Returns
/// - `Router` - Application ready to be served
pub fn app(state: AppState, config: &Config) -> Router {
    let (api, openapi) = router();
    let docs = ServeDir::new(&config.docs_dir).not_found_service(not_found.into_service());

    api.route("/api/openapi.json", get(move || async move { Json(openapi) }))
        .fallback_service(docs)
        .with_state(state)
        .layer(startup::setup_session_layer(config))
        .layer(startup::setup_cors_layer())
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> Html<&'static str> {
    Html("<h1>404 - File Not Found</h1>")
}
