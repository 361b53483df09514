use crate::server::{
    model::feature::{CategoryGroup, FeatureIndex, FeatureSummary},
    service::feature::{FeatureIndexService, UNCATEGORIZED},
};
use test_utils::{builder::TestBuilder, error::TestError, fixture::CommandSource};


/// Finds a category by name, panicking with the available names if it is missing.
fn category<'a>(index: &'a FeatureIndex, name: &str) -> &'a CategoryGroup {
    index
        .categories
        .iter()
        .find(|category| category.name == name)
        .unwrap_or_else(|| {
            let names: Vec<_> = index.categories.iter().map(|c| c.name.as_str()).collect();
            panic!("category {name} not in {names:?}")
        })
}
