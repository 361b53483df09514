mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let state = AppState::new(
        http_client,
        oauth_client,
        config.commands_dir.clone(),
        config.owner_ids.clone(),
        config.app_url.clone(),
    );
    let app = router::app(state, &config);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(
        "Dashboard listening on port {}, serving commands from {}",
        config.port,
        config.commands_dir.display()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
