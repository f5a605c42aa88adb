//! Visible item list of a shopping list
//!
//! The list screen keeps every item of the list plus a
//! [`SortAndFilterSettings`]; whenever the settings change it calls
//! [`apply`] to get the items to show.

pub mod tags;

use std::cmp::Ordering;

use crate::config::AppSettings;
use crate::shared::types::{Item, Order, SortAndFilterSettings, SortKey, SortSetting};

pub use tags::{checked_tags, collect_tag_options};

/// Criterion used when no sort setting is selected
pub const FALLBACK_SORT: (SortKey, Order) = (SortKey::Name, Order::Desc);

const SORT_KEYS: [SortKey; 5] = [
    SortKey::Name,
    SortKey::CurrentAmount,
    SortKey::TotalAmount,
    SortKey::Bought,
    SortKey::Description,
];

impl Default for SortAndFilterSettings {
    fn default() -> Self {
        Self::from_settings(&AppSettings::default())
    }
}

impl SortAndFilterSettings {
    /// Settings a list screen opens with, using the saved sort direction
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::with_order(settings.default_sort_order)
    }

    /// Fresh settings: no search, no tags, every key in `order`, name selected
    pub fn with_order(order: Order) -> Self {
        Self {
            filter_tags: Vec::new(),
            search_text: String::new(),
            sort: SORT_KEYS
                .iter()
                .map(|&key| SortSetting {
                    key,
                    order,
                    selected: key == SortKey::Name,
                })
                .collect(),
        }
    }

    /// The first selected criterion in declaration order
    pub fn active_sort(&self) -> (SortKey, Order) {
        self.sort
            .iter()
            .find(|setting| setting.selected)
            .map(|setting| (setting.key, setting.order))
            .unwrap_or(FALLBACK_SORT)
    }

    /// Select `key` and deselect every other criterion
    pub fn select_sort_key(&mut self, key: SortKey) {
        for setting in &mut self.sort {
            setting.selected = setting.key == key;
        }
    }

    pub fn toggle_sort_order(&mut self, key: SortKey) {
        for setting in self.sort.iter_mut().filter(|setting| setting.key == key) {
            setting.order = match setting.order {
                Order::Asc => Order::Desc,
                Order::Desc => Order::Asc,
            };
        }
    }

    pub fn remove_filter_tag(&mut self, tag: &str) {
        self.filter_tags.retain(|filter_tag| filter_tag != tag);
    }
}

pub fn sort_key_label(key: SortKey) -> &'static str {
    match key {
        SortKey::Name => "Name",
        SortKey::CurrentAmount => "Current amount",
        SortKey::TotalAmount => "Total (max) amount",
        SortKey::Bought => "Is bought",
        SortKey::Description => "Description",
    }
}

/// Filter and sort `all_items` for display. `all_items` is left untouched.
pub fn apply(all_items: &[Item], settings: &SortAndFilterSettings) -> Vec<Item> {
    let search_text = settings.search_text.to_lowercase();

    let mut visible: Vec<Item> = all_items
        .iter()
        .filter(|item| matches_search(item, &search_text) && has_filter_tag(item, &settings.filter_tags))
        .cloned()
        .collect();

    let (key, order) = settings.active_sort();
    // sort_by is stable, equal values keep their incoming order
    visible.sort_by(|a, b| compare(&sort_value(a, key), &sort_value(b, key), order));

    log::debug!(
        "[apply] {} of {} items visible, sorted by {:?} {:?}",
        visible.len(),
        all_items.len(),
        key,
        order
    );
    visible
}

fn matches_search(item: &Item, search_text: &str) -> bool {
    item.name.to_lowercase().contains(search_text)
}

fn has_filter_tag(item: &Item, filter_tags: &[String]) -> bool {
    filter_tags.is_empty() || filter_tags.iter().any(|tag| item.tags.contains(tag))
}

#[derive(Debug, PartialEq, PartialOrd)]
enum SortValue<'a> {
    Text(&'a str),
    Number(f64),
    Flag(bool),
}

fn sort_value(item: &Item, key: SortKey) -> SortValue<'_> {
    match key {
        SortKey::Name => SortValue::Text(&item.name),
        SortKey::Description => SortValue::Text(&item.description),
        SortKey::CurrentAmount => SortValue::Number(item.current_amount),
        SortKey::TotalAmount => SortValue::Number(item.total_amount),
        SortKey::Bought => SortValue::Flag(item.bought),
    }
}

fn compare(a: &SortValue<'_>, b: &SortValue<'_>, order: Order) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let ordering = a.partial_cmp(b).unwrap_or(Ordering::Equal);
    match order {
        Order::Asc => ordering,
        Order::Desc => ordering.reverse(),
    }
}
