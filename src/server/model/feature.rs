//! Feature index domain models.
//!
//! Defines the command descriptor discovered from a command source file and the
//! category/subcategory hierarchy it is grouped into. A `FeatureIndex` is built fresh on
//! each rebuild and never mutated afterwards; the cache swaps whole indexes.

use chrono::{DateTime, Utc};

use crate::model::feature::{
    CategoryDto, CommandDto, FeatureIndexDto, FeatureSummaryDto, SubcategoryDto,
};

/// One command discovered in the command tree.
///
/// Only exists when both `name` and `description` were extracted from the source.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
    pub usage: Option<String>,
    /// Explicit `category` field, else the top-level directory, else "uncategorized".
    pub category: String,
    /// Directories between the category directory and the file, joined with `/`.
    pub subcategory: Option<String>,
    /// Aliases in order of appearance in the source.
    pub aliases: Vec<String>,
    pub enabled_slash: bool,
    /// Location relative to the command root with `/` separators.
    pub path: String,
}

impl CommandDescriptor {
    pub fn to_dto(&self) -> CommandDto {
        CommandDto {
            name: self.name.clone(),
            description: self.description.clone(),
            usage: self.usage.clone(),
            aliases: self.aliases.clone(),
            enabled_slash: self.enabled_slash,
            category: self.category.clone(),
            subcategory: self.subcategory.clone(),
            path: self.path.clone(),
        }
    }
}

/// Commands sharing a category and subcategory, sorted by name.
#[derive(Debug, Clone, PartialEq)]
pub struct SubcategoryGroup {
    pub name: String,
    pub commands: Vec<CommandDescriptor>,
}

/// Commands sharing a category.
///
/// `commands` holds the commands without a subcategory; `subcategories` is sorted by name.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub name: String,
    pub commands: Vec<CommandDescriptor>,
    pub subcategories: Vec<SubcategoryGroup>,
}

impl CategoryGroup {
    /// Iterates over every command in the category, direct ones first.
    pub fn all_commands(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.iter().chain(
            self.subcategories
                .iter()
                .flat_map(|subcategory| subcategory.commands.iter()),
        )
    }
}

/// Counters describing a built index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureSummary {
    pub total_commands: usize,
    pub slash_enabled: usize,
    pub categories: usize,
    /// Sum of subcategory counts across all categories.
    pub subcategories: usize,
}

impl FeatureSummary {
    /// Computes the counters from the grouped categories.
    pub fn from_categories(categories: &[CategoryGroup]) -> Self {
        let mut summary = Self {
            categories: categories.len(),
            ..Self::default()
        };

        for category in categories {
            summary.subcategories += category.subcategories.len();
            for command in category.all_commands() {
                summary.total_commands += 1;
                if command.enabled_slash {
                    summary.slash_enabled += 1;
                }
            }
        }

        summary
    }
}

/// The complete, sorted, summarized catalog of discovered commands.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureIndex {
    pub generated_at: DateTime<Utc>,
    pub summary: FeatureSummary,
    pub categories: Vec<CategoryGroup>,
}

impl FeatureIndex {
    /// An index with no commands, stamped now.
    pub fn empty() -> Self {
        Self::from_categories(Vec::new())
    }

    /// Wraps already sorted categories, computing the summary and stamping now.
    pub fn from_categories(categories: Vec<CategoryGroup>) -> Self {
        Self {
            summary: FeatureSummary::from_categories(&categories),
            categories,
            generated_at: Utc::now(),
        }
    }

    pub fn to_dto(&self) -> FeatureIndexDto {
        FeatureIndexDto {
            generated_at: self.generated_at,
            summary: FeatureSummaryDto {
                total_commands: self.summary.total_commands,
                slash_enabled: self.summary.slash_enabled,
                categories: self.summary.categories,
                subcategories: self.summary.subcategories,
            },
            categories: self
                .categories
                .iter()
                .map(|category| CategoryDto {
                    name: category.name.clone(),
                    commands: category.commands.iter().map(|c| c.to_dto()).collect(),
                    subcategories: category
                        .subcategories
                        .iter()
                        .map(|subcategory| SubcategoryDto {
                            name: subcategory.name.clone(),
                            commands: subcategory.commands.iter().map(|c| c.to_dto()).collect(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
