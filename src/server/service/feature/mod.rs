//! Feature index service for the command documentation site.
//!
//! This module provides the `FeatureIndexService`, which turns the command tree into a
//! `FeatureIndex`: every command file with an extractable `name` and `description`
//! becomes a `CommandDescriptor`, grouped by category and optional subcategory and sorted
//! by name at every level. Files missing either field are left out entirely.
//!
//! The service is organized into separate modules by concern:
//! - `cache` - Single-slot TTL cache serving the last built index

pub mod cache;

#[cfg(test)]
mod test;

use std::{collections::BTreeMap, path::Path};

use crate::server::{
    data::command_file::{CommandFile, CommandFileRepository},
    model::feature::{CategoryGroup, CommandDescriptor, FeatureIndex, SubcategoryGroup},
    service::metadata::CommandMetadata,
    util::collate::locale_cmp,
};

/// Category assigned when neither the source nor the directory layout names one.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Service building feature indexes from a command root.
///
/// Building is synchronous and best-effort: a missing root yields an empty index and
/// unreadable or incomplete files are skipped.
pub struct FeatureIndexService<'a> {
    /// Directory holding the command source files
    root: &'a Path,
}

impl<'a> FeatureIndexService<'a> {
    /// Creates a new FeatureIndexService instance.
    ///
    /// # Arguments
    /// - `root` - Directory holding the command source files
    ///
    /// # Returns
    /// - `FeatureIndexService` - New service instance
    pub fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// Builds a fresh index from the current contents of the command root.
    ///
    /// Two builds over an unchanged tree produce equal indexes apart from `generated_at`.
    ///
    /// # Returns
    /// - `FeatureIndex` - Sorted, summarized index stamped with the completion time
    pub fn build(&self) -> FeatureIndex {
        let repo = CommandFileRepository::new(self.root);
        if !repo.root_exists() {
            tracing::debug!(
                "Command root {} does not exist, serving empty index",
                self.root.display()
            );
            return FeatureIndex::empty();
        }

        let descriptors = repo.find_all().into_iter().filter_map(describe);
        let index = FeatureIndex::from_categories(group(descriptors));

        tracing::debug!(
            "Built feature index: {} commands in {} categories",
            index.summary.total_commands,
            index.summary.categories
        );

        index
    }
}

/// Turns a command file into a descriptor, or `None` if `name` or `description` is missing.
fn describe(file: CommandFile) -> Option<CommandDescriptor> {
    let metadata = CommandMetadata::extract(&file.content);

    let (Some(name), Some(description)) = (metadata.name, metadata.description) else {
        tracing::debug!(
            "Skipping {}: missing name or description",
            file.relative_path()
        );
        return None;
    };

    let directories = file.directories();
    let category = metadata
        .category
        .or_else(|| directories.first().cloned())
        .unwrap_or_else(|| UNCATEGORIZED.to_string());
    let subcategory = match directories {
        [_, nested @ ..] if !nested.is_empty() => Some(nested.join("/")),
        _ => None,
    };

    Some(CommandDescriptor {
        name,
        description,
        usage: metadata.usage,
        category,
        subcategory,
        aliases: metadata.aliases,
        enabled_slash: metadata.enabled_slash.unwrap_or(false),
        path: file.relative_path(),
    })
}

/// Commands of one category before sorting.
#[derive(Default)]
struct CategoryBucket {
    direct: Vec<CommandDescriptor>,
    subcategories: BTreeMap<String, Vec<CommandDescriptor>>,
}

/// Groups descriptors by category and subcategory, sorting every level.
fn group(descriptors: impl Iterator<Item = CommandDescriptor>) -> Vec<CategoryGroup> {
    let mut buckets: BTreeMap<String, CategoryBucket> = BTreeMap::new();

    for descriptor in descriptors {
        let bucket = buckets.entry(descriptor.category.clone()).or_default();
        match descriptor.subcategory.clone() {
            Some(subcategory) => bucket
                .subcategories
                .entry(subcategory)
                .or_default()
                .push(descriptor),
            None => bucket.direct.push(descriptor),
        }
    }

    let mut categories: Vec<CategoryGroup> = buckets
        .into_iter()
        .map(|(name, bucket)| {
            let mut subcategories: Vec<SubcategoryGroup> = bucket
                .subcategories
                .into_iter()
                .map(|(name, commands)| SubcategoryGroup {
                    name,
                    commands: sorted(commands),
                })
                .collect();
            subcategories.sort_by(|a, b| locale_cmp(&a.name, &b.name));

            CategoryGroup {
                name,
                commands: sorted(bucket.direct),
                subcategories,
            }
        })
        .collect();
    categories.sort_by(|a, b| locale_cmp(&a.name, &b.name));

    categories
}

/// Sorts by name; equal names fall back to path so the order does not depend on traversal.
fn sorted(mut commands: Vec<CommandDescriptor>) -> Vec<CommandDescriptor> {
    commands.sort_by(|a, b| locale_cmp(&a.name, &b.name).then_with(|| a.path.cmp(&b.path)));
    commands
}
