use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, command::CommandListDto},
    server::{error::AppError, service::command::CommandListService, state::AppState},
};

/// Tag for grouping command listing endpoints in OpenAPI documentation
pub static COMMAND_TAG: &str = "command";

/// List every named command.
///
/// Scans the command tree on every request. Only `name` is required; the other fields
/// fall back to defaults. Commands are also grouped by their top-level category.
///
/// # Access Control
/// - `Public` - No authentication required
///
/// # Returns
/// - `200 OK` - All named commands with their grouping and total
/// - `500 Internal Server Error` - The listing task failed
#[utoipa::path(
    get,
    path = "/api/commands",
    tag = COMMAND_TAG,
    responses(
        (status = 200, description = "Successfully listed commands", body = CommandListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_commands(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let catalog = CommandListService::new(&state.commands_dir).list().await?;

    Ok(Json(catalog.into_dto()))
}
