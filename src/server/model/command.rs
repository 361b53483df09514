//! Command listing domain models.
//!
//! The flat listing is a looser view than the feature index: only `name` is required and
//! the remaining fields fall back to defaults.

use std::collections::BTreeMap;

use crate::model::command::{CommandEntryDto, CommandListDto};

/// Cooldown in seconds reported when a command declares none.
pub const DEFAULT_COOLDOWN: u64 = 3;

/// Description reported when a command declares none.
pub const DEFAULT_DESCRIPTION: &str = "No description";

#[derive(Debug, Clone, PartialEq)]
pub struct CommandEntry {
    pub name: String,
    pub description: String,
    pub usage: String,
    pub aliases: Vec<String>,
    pub enabled_slash: bool,
    pub cooldown: u64,
    /// Directory path relative to the command root, or "uncategorized" at the root.
    pub category: String,
    /// File name of the command source.
    pub file: String,
}

impl CommandEntry {
    /// The first segment of `category`, used to group the listing.
    pub fn top_level_category(&self) -> &str {
        self.category
            .split('/')
            .next()
            .unwrap_or(self.category.as_str())
    }

    pub fn to_dto(&self) -> CommandEntryDto {
        CommandEntryDto {
            name: self.name.clone(),
            description: self.description.clone(),
            usage: self.usage.clone(),
            aliases: self.aliases.clone(),
            enabled_slash: self.enabled_slash,
            cooldown: self.cooldown,
            category: self.category.clone(),
            file: self.file.clone(),
        }
    }
}

/// Every listed command, sorted by category and then name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandCatalog {
    pub commands: Vec<CommandEntry>,
}

impl CommandCatalog {
    pub fn into_dto(self) -> CommandListDto {
        let mut categories: BTreeMap<String, Vec<CommandEntryDto>> = BTreeMap::new();
        for command in &self.commands {
            categories
                .entry(command.top_level_category().to_string())
                .or_default()
                .push(command.to_dto());
        }

        CommandListDto {
            total: self.commands.len(),
            commands: self.commands.iter().map(CommandEntry::to_dto).collect(),
            categories,
        }
    }
}
