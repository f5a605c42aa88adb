//! Helpers for single shopping list items

use crate::core::features::unit_converter::{abbreviate, Unit};
use crate::shared::types::Item;

/// Starting point of the "new item" form
pub fn blank() -> Item {
    Item {
        id: String::new(),
        name: String::new(),
        description: String::new(),
        total_amount: 0.0,
        current_amount: 0.0,
        unit: Unit::Item,
        bought: false,
        tags: Vec::new(),
    }
}

/// An item counts as checked off once everything has been collected
pub fn is_complete(item: &Item) -> bool {
    item.current_amount == item.total_amount
}

/// Checkbox toggle: fill up a partial item, clear a complete one
pub fn toggle_complete(item: &Item) -> Item {
    let current_amount = if item.current_amount < item.total_amount {
        item.total_amount
    } else {
        0.0
    };
    Item {
        current_amount,
        ..item.clone()
    }
}

/// Step the collected amount by `delta`. Steps that would leave
/// `[0, total_amount]` are ignored and the item comes back unchanged.
pub fn adjust_current_amount(item: &Item, delta: f64) -> Item {
    let current_amount = item.current_amount + delta;
    if current_amount < 0.0 || current_amount > item.total_amount {
        return item.clone();
    }
    Item {
        current_amount,
        ..item.clone()
    }
}

/// `"2 kg"`, as shown next to the item name
pub fn amount_label(item: &Item) -> String {
    format!("{} {}", item.total_amount, abbreviate(item.unit))
}
