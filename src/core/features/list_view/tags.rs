use std::collections::HashSet;

use crate::shared::types::{Item, TagOption};

/// Distinct tags of `items` in first-seen order.
///
/// Tags already present in `previous` keep their checked state, new tags
/// start unchecked and tags no item carries any more are dropped.
pub fn collect_tag_options(items: &[Item], previous: &[TagOption]) -> Vec<TagOption> {
    let mut seen = HashSet::new();
    items
        .iter()
        .flat_map(|item| item.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .map(|tag| TagOption {
            name: tag.clone(),
            checked: previous
                .iter()
                .find(|option| &option.name == tag)
                .map(|option| option.checked)
                .unwrap_or(false),
        })
        .collect()
}

/// Names of the checked options, ready for `filter_tags`
pub fn checked_tags(options: &[TagOption]) -> Vec<String> {
    options
        .iter()
        .filter(|option| option.checked)
        .map(|option| option.name.clone())
        .collect()
}
