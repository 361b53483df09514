use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, feature::FeatureIndexDto},
    server::{error::AppError, state::AppState},
};

/// Tag for grouping feature index endpoints in OpenAPI documentation
pub static FEATURE_TAG: &str = "feature";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeatureQuery {
    /// Set to `1` or `true` to rebuild the index before responding.
    pub refresh: Option<String>,
}

impl FeatureQuery {
    fn force_refresh(&self) -> bool {
        matches!(self.refresh.as_deref(), Some("1") | Some("true"))
    }
}

/// Get the feature index for the documentation site.
///
/// Returns every command with a name and description, grouped by category and
/// subcategory. The index is served from a cache that is rebuilt when it is older than
/// 60 seconds, or immediately when `refresh` is set.
///
/// # Access Control
/// - `Public` - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the feature index cache
/// - `query` - Optional refresh flag
///
/// # Returns
/// - `200 OK` - The feature index
/// - `500 Internal Server Error` - The rebuild task failed
#[utoipa::path(
    get,
    path = "/api/features",
    tag = FEATURE_TAG,
    params(FeatureQuery),
    responses(
        (status = 200, description = "Successfully retrieved feature index", body = FeatureIndexDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_features(
    State(state): State<AppState>,
    Query(query): Query<FeatureQuery>,
) -> Result<impl IntoResponse, AppError> {
    let index = state.feature_cache.get_index(query.force_refresh()).await?;

    Ok(Json(index.to_dto()))
}
