use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Flat command listing served by `/api/commands`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommandListDto {
    pub commands: Vec<CommandEntryDto>,
    /// Commands keyed by their top-level category directory.
    pub categories: BTreeMap<String, Vec<CommandEntryDto>>,
    pub total: usize,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommandEntryDto {
    pub name: String,
    pub description: String,
    pub usage: String,
    pub aliases: Vec<String>,
    pub enabled_slash: bool,
    pub cooldown: u64,
    pub category: String,
    pub file: String,
}
