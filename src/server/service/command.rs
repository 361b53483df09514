//! Command listing service.
//!
//! This module provides the `CommandListService`, which produces the flat listing served by
//! `/api/commands`. Unlike the feature index, only `name` is required; missing fields fall
//! back to defaults and the category is the directory path below the command root. The
//! listing is built on every request.

use std::path::{Path, PathBuf};

use crate::server::{
    data::command_file::{CommandFile, CommandFileRepository},
    error::AppError,
    model::command::{CommandCatalog, CommandEntry, DEFAULT_COOLDOWN, DEFAULT_DESCRIPTION},
    service::{feature::UNCATEGORIZED, metadata::CommandMetadata},
    util::collate::locale_cmp,
};

pub struct CommandListService<'a> {
    root: &'a Path,
}

impl<'a> CommandListService<'a> {
    /// Creates a new CommandListService instance.
    ///
    /// # Arguments
    /// - `root` - Directory holding the command source files
    ///
    /// # Returns
    /// - `CommandListService` - New service instance
    pub fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// Lists every command with a `name`, sorted by category and then name.
    ///
    /// Walking and reading the tree runs on the blocking thread pool.
    ///
    /// # Returns
    /// - `Ok(CommandCatalog)` - Listing of all named commands; empty when the root is missing
    /// - `Err(AppError::TaskErr)` - The blocking listing task panicked
    pub async fn list(&self) -> Result<CommandCatalog, AppError> {
        let root: PathBuf = self.root.to_path_buf();
        let catalog = tokio::task::spawn_blocking(move || list_blocking(&root)).await?;

        Ok(catalog)
    }
}

fn list_blocking(root: &Path) -> CommandCatalog {
    let mut commands: Vec<CommandEntry> = CommandFileRepository::new(root)
        .find_all()
        .into_iter()
        .filter_map(entry)
        .collect();

    commands.sort_by(|a, b| {
        locale_cmp(&a.category, &b.category)
            .then_with(|| locale_cmp(&a.name, &b.name))
            .then_with(|| a.file.cmp(&b.file))
    });

    CommandCatalog { commands }
}

/// Turns a command file into a listing entry, or `None` if it has no `name`.
///
/// A declared cooldown of zero is reported as the default, like a missing one.
fn entry(file: CommandFile) -> Option<CommandEntry> {
    let metadata = CommandMetadata::extract(&file.content);
    let name = metadata.name?;

    let category = match file.directories() {
        [] => UNCATEGORIZED.to_string(),
        directories => directories.join("/"),
    };

    Some(CommandEntry {
        description: metadata
            .description
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        usage: metadata.usage.unwrap_or_else(|| name.clone()),
        aliases: metadata.aliases,
        enabled_slash: metadata.enabled_slash.unwrap_or(false),
        cooldown: metadata
            .cooldown
            .filter(|&seconds| seconds > 0)
            .unwrap_or(DEFAULT_COOLDOWN),
        file: file.file_name().to_string(),
        category,
        name,
    })
}
