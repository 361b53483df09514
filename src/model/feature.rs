use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The documentation index served by `/api/features`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeatureIndexDto {
    pub generated_at: DateTime<Utc>,
    pub summary: FeatureSummaryDto,
    pub categories: Vec<CategoryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSummaryDto {
    pub total_commands: usize,
    pub slash_enabled: usize,
    pub categories: usize,
    pub subcategories: usize,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CategoryDto {
    pub name: String,
    pub commands: Vec<CommandDto>,
    pub subcategories: Vec<SubcategoryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SubcategoryDto {
    pub name: String,
    pub commands: Vec<CommandDto>,
}

/// One indexed command.
///
/// `usage` and `subcategory` serialize as `null` when absent rather than being omitted.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommandDto {
    pub name: String,
    pub description: String,
    pub usage: Option<String>,
    pub aliases: Vec<String>,
    pub enabled_slash: bool,
    pub category: String,
    pub subcategory: Option<String>,
    pub path: String,
}
