//! Unit converter
//!
//! Converts shopping amounts between the units the client offers. Metric
//! units of the same group are scaled by their decimal prefix; every other
//! pair goes through the directed conversion table in [`table`]. Pairs with
//! no conversion fall back to returning the amount unchanged.

pub mod parsing;
pub mod session;
mod table;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::shared::error::AppError;

pub use parsing::{format_amount, parse_amount, parse_quantity};
pub use session::ConverterSession;

// ============================================================================
// Unit Registry
// ============================================================================

/// Measurement units offered by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "shopping_list.ts")]
pub enum Unit {
    Item,
    Milligram,
    Gram,
    Kilogram,
    Pound,
    Ounce,
    Milliliter,
    Deciliter,
    Liter,
    Cup,
    Pint,
    Tablespoon,
    Teaspoon,
    /// Fluid ounce
    Fluid,
    Quart,
    Gallon,
    Gill,
    Millimeter,
    Centimeter,
    Meter,
    Inch,
}

/// Quantity kinds. Conversions only make sense inside one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "shopping_list.ts")]
pub enum UnitGroup {
    Amount,
    Mass,
    Volume,
    Length,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSystem {
    Metric,
    Imperial,
    Count,
}

/// Static descriptor attached to every unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSpec {
    pub group: UnitGroup,
    pub system: MeasureSystem,
    /// Power of ten relative to the base unit (milli = -3, kilo = 3).
    /// Always 0 outside the metric system.
    pub prefix_exponent: i32,
}

impl UnitSpec {
    const fn metric(group: UnitGroup, prefix_exponent: i32) -> Self {
        Self { group, system: MeasureSystem::Metric, prefix_exponent }
    }

    const fn imperial(group: UnitGroup) -> Self {
        Self { group, system: MeasureSystem::Imperial, prefix_exponent: 0 }
    }
}

const AMOUNT_UNITS: &[Unit] = &[Unit::Item];

const MASS_UNITS: &[Unit] = &[
    Unit::Milligram,
    Unit::Gram,
    Unit::Kilogram,
    Unit::Pound,
    Unit::Ounce,
];

const VOLUME_UNITS: &[Unit] = &[
    Unit::Milliliter,
    Unit::Deciliter,
    Unit::Liter,
    Unit::Cup,
    Unit::Pint,
    Unit::Tablespoon,
    Unit::Teaspoon,
    Unit::Fluid,
    Unit::Quart,
    Unit::Gallon,
    Unit::Gill,
];

const LENGTH_UNITS: &[Unit] = &[
    Unit::Millimeter,
    Unit::Centimeter,
    Unit::Meter,
    Unit::Inch,
];

/// Short display tokens shown next to amounts
const ABBREVIATIONS: &[(Unit, &str)] = &[
    (Unit::Gram, "g"),
    (Unit::Milligram, "mg"),
    (Unit::Kilogram, "kg"),
    (Unit::Pound, "lb"),
    (Unit::Ounce, "oz"),
    (Unit::Milliliter, "ml"),
    (Unit::Deciliter, "dl"),
    (Unit::Liter, "l"),
    (Unit::Cup, "c"),
    (Unit::Pint, "pt"),
    (Unit::Quart, "qt"),
    (Unit::Gallon, "gl"),
    (Unit::Teaspoon, "tsp"),
    (Unit::Tablespoon, "tbs"),
    (Unit::Gill, "gi"),
    (Unit::Fluid, "fl oz"),
    (Unit::Centimeter, "cm"),
    (Unit::Millimeter, "mm"),
    (Unit::Meter, "m"),
    (Unit::Inch, "in"),
    (Unit::Item, "pc"),
];

impl Unit {
    pub const ALL: [Unit; 21] = [
        Unit::Item,
        Unit::Milligram,
        Unit::Gram,
        Unit::Kilogram,
        Unit::Pound,
        Unit::Ounce,
        Unit::Milliliter,
        Unit::Deciliter,
        Unit::Liter,
        Unit::Cup,
        Unit::Pint,
        Unit::Tablespoon,
        Unit::Teaspoon,
        Unit::Fluid,
        Unit::Quart,
        Unit::Gallon,
        Unit::Gill,
        Unit::Millimeter,
        Unit::Centimeter,
        Unit::Meter,
        Unit::Inch,
    ];

    pub const fn spec(self) -> UnitSpec {
        use UnitGroup::*;
        match self {
            Unit::Item => UnitSpec {
                group: Amount,
                system: MeasureSystem::Count,
                prefix_exponent: 0,
            },
            Unit::Milligram => UnitSpec::metric(Mass, -3),
            Unit::Gram => UnitSpec::metric(Mass, 0),
            Unit::Kilogram => UnitSpec::metric(Mass, 3),
            Unit::Pound | Unit::Ounce => UnitSpec::imperial(Mass),
            Unit::Milliliter => UnitSpec::metric(Volume, -3),
            Unit::Deciliter => UnitSpec::metric(Volume, -1),
            Unit::Liter => UnitSpec::metric(Volume, 0),
            Unit::Cup
            | Unit::Pint
            | Unit::Tablespoon
            | Unit::Teaspoon
            | Unit::Fluid
            | Unit::Quart
            | Unit::Gallon
            | Unit::Gill => UnitSpec::imperial(Volume),
            Unit::Millimeter => UnitSpec::metric(Length, -3),
            Unit::Centimeter => UnitSpec::metric(Length, -2),
            Unit::Meter => UnitSpec::metric(Length, 0),
            Unit::Inch => UnitSpec::imperial(Length),
        }
    }

    pub const fn group(self) -> UnitGroup {
        self.spec().group
    }

    pub fn is_metric(self) -> bool {
        self.spec().system == MeasureSystem::Metric
    }

    /// Wire identifier, e.g. `"MILLILITER"`
    pub const fn as_str(self) -> &'static str {
        match self {
            Unit::Item => "ITEM",
            Unit::Milligram => "MILLIGRAM",
            Unit::Gram => "GRAM",
            Unit::Kilogram => "KILOGRAM",
            Unit::Pound => "POUND",
            Unit::Ounce => "OUNCE",
            Unit::Milliliter => "MILLILITER",
            Unit::Deciliter => "DECILITER",
            Unit::Liter => "LITER",
            Unit::Cup => "CUP",
            Unit::Pint => "PINT",
            Unit::Tablespoon => "TABLESPOON",
            Unit::Teaspoon => "TEASPOON",
            Unit::Fluid => "FLUID",
            Unit::Quart => "QUART",
            Unit::Gallon => "GALLON",
            Unit::Gill => "GILL",
            Unit::Millimeter => "MILLIMETER",
            Unit::Centimeter => "CENTIMETER",
            Unit::Meter => "METER",
            Unit::Inch => "INCH",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Unit::ALL
            .iter()
            .copied()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(id))
            .ok_or_else(|| AppError::Validation(format!("Unknown unit: {}", s)))
    }
}

impl UnitGroup {
    pub const ALL: [UnitGroup; 4] = [
        UnitGroup::Amount,
        UnitGroup::Mass,
        UnitGroup::Volume,
        UnitGroup::Length,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            UnitGroup::Amount => "AMOUNT",
            UnitGroup::Mass => "MASS",
            UnitGroup::Volume => "VOLUME",
            UnitGroup::Length => "LENGTH",
        }
    }
}

impl fmt::Display for UnitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        UnitGroup::ALL
            .iter()
            .copied()
            .find(|group| group.as_str().eq_ignore_ascii_case(id))
            .ok_or_else(|| AppError::Validation(format!("Unknown unit group: {}", s)))
    }
}

// ============================================================================
// Conversion
// ============================================================================

/// Convert `amount` from one unit to another.
///
/// Never fails: a pair without a known conversion (including pairs from
/// different groups) returns `amount` unchanged. The result is not rounded.
pub fn convert(amount: f64, from: Unit, to: Unit) -> f64 {
    if amount == 0.0 {
        return 0.0;
    }
    if from == to {
        return amount;
    }
    if can_convert_metric(from, to) {
        return convert_metric(amount, from, to);
    }

    match table::lookup(from, to) {
        Some(conversion) => conversion.apply(amount),
        None => {
            log::debug!(
                "[convert] No conversion for {} => {}, returning amount unchanged",
                from,
                to
            );
            amount
        }
    }
}

fn can_convert_metric(from: Unit, to: Unit) -> bool {
    from.is_metric() && to.is_metric() && from.group() == to.group()
}

fn convert_metric(amount: f64, from: Unit, to: Unit) -> f64 {
    let base_amount = to_base_metric(amount, from.spec().prefix_exponent);
    from_base_metric(base_amount, to.spec().prefix_exponent)
}

// Divide rather than multiply by 10^-n so milli/centi/deci stay exact decimals
fn to_base_metric(amount: f64, exponent: i32) -> f64 {
    if exponent < 0 {
        amount / 10f64.powi(-exponent)
    } else {
        amount * 10f64.powi(exponent)
    }
}

fn from_base_metric(base_amount: f64, exponent: i32) -> f64 {
    if exponent < 0 {
        base_amount * 10f64.powi(-exponent)
    } else {
        base_amount / 10f64.powi(exponent)
    }
}

// ============================================================================
// Labels and pickers
// ============================================================================

/// Short display token for a unit, e.g. `"tbs"`
pub fn abbreviate(unit: Unit) -> &'static str {
    ABBREVIATIONS
        .iter()
        .find(|(candidate, _)| *candidate == unit)
        .map(|(_, abbreviation)| *abbreviation)
        .unwrap_or_else(|| unit.as_str())
}

/// Human readable unit name, e.g. `"Tablespoon"`
pub fn translate(unit: Unit) -> String {
    if unit == Unit::Fluid {
        return "Fluid ounce".to_string();
    }
    let id = unit.as_str();
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first, chars.as_str().to_lowercase()),
        None => String::new(),
    }
}

/// Ordered units of a group, as listed in unit pickers
pub fn units_in_group(group: UnitGroup) -> &'static [Unit] {
    match group {
        UnitGroup::Amount => AMOUNT_UNITS,
        UnitGroup::Mass => MASS_UNITS,
        UnitGroup::Volume => VOLUME_UNITS,
        UnitGroup::Length => LENGTH_UNITS,
    }
}

/// Units for a picker; without a group every unit is offered
pub fn available_units(group: Option<UnitGroup>) -> &'static [Unit] {
    match group {
        Some(group) => units_in_group(group),
        None => &Unit::ALL,
    }
}

/// Unit selected when the converter switches to `group`
pub fn default_unit(group: UnitGroup) -> Unit {
    units_in_group(group).last().copied().unwrap_or(Unit::Item)
}

pub fn picker_label(unit: Unit) -> String {
    format!("{}   ( {} )", translate(unit), abbreviate(unit))
}
