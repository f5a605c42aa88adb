//! Two-sided converter form: editing either amount recomputes the other.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::parsing::{format_amount, leading_number, parse_amount};
use super::{convert, default_unit, Unit, UnitGroup};
use crate::config::AppSettings;

const DEFAULT_AMOUNT: &str = "1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "shopping_list.ts")]
pub struct ConverterSession {
    pub from_amount: String,
    pub to_amount: String,
    pub from_unit: Unit,
    pub to_unit: Unit,
    pub group: UnitGroup,
    pub precision: usize,
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self {
            from_amount: DEFAULT_AMOUNT.to_string(),
            to_amount: DEFAULT_AMOUNT.to_string(),
            from_unit: Unit::Gram,
            to_unit: Unit::Gram,
            group: UnitGroup::Mass,
            precision: AppSettings::default().display_precision,
        }
    }
}

impl ConverterSession {
    pub fn from_settings(settings: &AppSettings) -> Self {
        let mut session = Self {
            precision: settings.display_precision,
            ..Self::default()
        };
        if settings.default_group != session.group {
            session.set_group(settings.default_group);
        }
        session
    }

    /// Seed the left-hand amount, e.g. from an item being edited.
    /// Input that does not start with a number is replaced by "1".
    pub fn with_initial_amount(mut self, amount: &str) -> Self {
        let amount = if leading_number(amount).is_some() {
            amount
        } else {
            DEFAULT_AMOUNT
        };
        self.set_from_amount(amount);
        self
    }

    /// Seed both amount and unit, switching to the unit's group
    pub fn with_initial_quantity(mut self, amount: &str, unit: Unit) -> Self {
        if unit.group() != self.group {
            self.set_group(unit.group());
        }
        self.from_unit = unit;
        self.with_initial_amount(amount)
    }

    pub fn set_from_amount(&mut self, input: &str) {
        let converted = convert(parse_amount(input), self.from_unit, self.to_unit);
        self.from_amount = input.to_string();
        self.to_amount = format_amount(converted, self.precision);
    }

    pub fn set_to_amount(&mut self, input: &str) {
        let converted = convert(parse_amount(input), self.to_unit, self.from_unit);
        self.to_amount = input.to_string();
        self.from_amount = format_amount(converted, self.precision);
    }

    pub fn set_from_unit(&mut self, unit: Unit) {
        self.from_unit = unit;
        let amount = self.from_amount.clone();
        self.set_from_amount(&amount);
    }

    pub fn set_to_unit(&mut self, unit: Unit) {
        self.to_unit = unit;
        let amount = self.from_amount.clone();
        self.set_from_amount(&amount);
    }

    /// Switch the unit group; both sides reset to the group's default unit
    pub fn set_group(&mut self, group: UnitGroup) {
        let unit = default_unit(group);
        self.group = group;
        self.from_unit = unit;
        self.to_unit = unit;
        self.from_amount = DEFAULT_AMOUNT.to_string();
        self.to_amount = DEFAULT_AMOUNT.to_string();
    }
}
