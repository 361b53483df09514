use axum::{extract::State, Json};
use chrono::Utc;

use crate::{model::api::HealthDto, server::state::AppState};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report that the dashboard is up.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Dashboard is running", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
        message: "Dashboard is running".to_string(),
        timestamp: Utc::now(),
        dashboard: state.app_url.clone(),
    })
}
