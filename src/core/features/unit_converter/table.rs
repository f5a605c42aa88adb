//! Directed conversion table for pairs that are not both metric.
//!
//! Factors are rounded kitchen approximations (imperial volume measures),
//! so a round trip through the table drifts slightly.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::Unit;
use super::Unit::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Conversion {
    Multiply(f64),
    Divide(f64),
}

impl Conversion {
    pub(super) fn apply(self, amount: f64) -> f64 {
        match self {
            Conversion::Multiply(factor) => amount * factor,
            Conversion::Divide(factor) => amount / factor,
        }
    }
}

use Conversion::{Divide as Div, Multiply as Mul};

const CONVERSIONS: &[(Unit, Unit, Conversion)] = &[
    // Mass
    (Milligram, Pound, Div(453592.0)),
    (Milligram, Ounce, Div(28350.0)),
    (Gram, Pound, Div(454.0)),
    (Gram, Ounce, Div(28.35)),
    (Kilogram, Pound, Mul(2.205)),
    (Kilogram, Ounce, Mul(35.274)),
    (Pound, Ounce, Mul(16.0)),
    (Pound, Milligram, Mul(453592.0)),
    (Pound, Gram, Mul(454.0)),
    (Pound, Kilogram, Div(2.205)),
    (Ounce, Pound, Div(16.0)),
    (Ounce, Milligram, Mul(28350.0)),
    (Ounce, Gram, Mul(28.35)),
    (Ounce, Kilogram, Div(35.274)),
    // Volume (imperial measures)
    (Milliliter, Cup, Div(284.0)),
    (Milliliter, Fluid, Div(28.413)),
    (Milliliter, Tablespoon, Div(17.758)),
    (Milliliter, Teaspoon, Div(5.919)),
    (Milliliter, Gallon, Div(4546.0)),
    (Milliliter, Quart, Div(1137.0)),
    (Milliliter, Gill, Div(118.0)),
    (Milliliter, Pint, Div(568.0)),
    (Deciliter, Cup, Div(2.841)),
    (Deciliter, Fluid, Mul(3.52)),
    (Deciliter, Pint, Div(5.683)),
    (Deciliter, Quart, Div(11.365)),
    (Deciliter, Gallon, Div(45.461)),
    (Deciliter, Tablespoon, Mul(5.631)),
    (Deciliter, Teaspoon, Mul(16.894)),
    (Deciliter, Gill, Div(1.183)),
    (Liter, Cup, Mul(3.52)),
    (Liter, Fluid, Mul(35.195)),
    (Liter, Tablespoon, Mul(56.312)),
    (Liter, Teaspoon, Mul(169.0)),
    (Liter, Gill, Mul(8.454)),
    (Liter, Gallon, Div(4.546)),
    (Liter, Quart, Div(1.137)),
    (Liter, Pint, Mul(1.76)),
    (Gill, Milliliter, Mul(118.0)),
    (Gill, Deciliter, Mul(1.183)),
    (Gill, Liter, Div(8.454)),
    (Gill, Cup, Div(2.402)),
    (Gill, Fluid, Mul(4.163)),
    (Gill, Tablespoon, Mul(6.661)),
    (Gill, Teaspoon, Mul(19.984)),
    (Gill, Quart, Div(9.608)),
    (Gill, Pint, Div(4.804)),
    (Gill, Gallon, Div(38.43)),
    (Cup, Milliliter, Mul(284.0)),
    (Cup, Deciliter, Mul(2.841)),
    (Cup, Liter, Div(3.52)),
    (Cup, Teaspoon, Mul(48.0)),
    (Cup, Tablespoon, Mul(16.0)),
    (Cup, Gallon, Div(16.0)),
    (Cup, Fluid, Mul(10.0)),
    (Cup, Pint, Div(2.0)),
    (Cup, Quart, Div(4.0)),
    (Cup, Gill, Mul(2.402)),
    (Pint, Milliliter, Mul(568.0)),
    (Pint, Deciliter, Mul(5.683)),
    (Pint, Liter, Div(1.76)),
    (Pint, Cup, Mul(2.0)),
    (Pint, Fluid, Mul(20.0)),
    (Pint, Gallon, Div(8.0)),
    (Pint, Tablespoon, Mul(32.0)),
    (Pint, Teaspoon, Mul(96.0)),
    (Pint, Quart, Div(2.0)),
    (Pint, Gill, Mul(4.804)),
    (Tablespoon, Milliliter, Mul(17.758)),
    (Tablespoon, Deciliter, Div(5.631)),
    (Tablespoon, Liter, Div(56.312)),
    (Tablespoon, Cup, Div(16.0)),
    (Tablespoon, Fluid, Div(1.6)),
    (Tablespoon, Gallon, Div(256.0)),
    (Tablespoon, Teaspoon, Mul(3.0)),
    (Tablespoon, Gill, Div(6.661)),
    (Tablespoon, Quart, Div(64.0)),
    (Tablespoon, Pint, Div(32.0)),
    (Teaspoon, Milliliter, Mul(5.919)),
    (Teaspoon, Deciliter, Div(16.894)),
    (Teaspoon, Liter, Div(169.0)),
    (Teaspoon, Tablespoon, Div(3.0)),
    (Teaspoon, Cup, Div(48.0)),
    (Teaspoon, Pint, Div(96.0)),
    (Teaspoon, Gallon, Div(768.0)),
    (Teaspoon, Gill, Div(19.984)),
    (Teaspoon, Fluid, Div(4.8)),
    (Teaspoon, Quart, Div(192.0)),
    (Gallon, Milliliter, Mul(4546.0)),
    (Gallon, Deciliter, Mul(45.461)),
    (Gallon, Liter, Mul(4.546)),
    (Gallon, Cup, Mul(16.0)),
    (Gallon, Fluid, Mul(160.0)),
    (Gallon, Tablespoon, Mul(256.0)),
    (Gallon, Teaspoon, Mul(768.0)),
    (Gallon, Pint, Mul(8.0)),
    (Gallon, Quart, Mul(4.0)),
    (Gallon, Gill, Mul(38.43)),
    (Quart, Milliliter, Mul(1137.0)),
    (Quart, Deciliter, Mul(11.365)),
    (Quart, Liter, Mul(1.137)),
    (Quart, Gallon, Div(4.0)),
    (Quart, Pint, Mul(2.0)),
    (Quart, Gill, Mul(9.608)),
    (Quart, Cup, Mul(4.0)),
    (Quart, Tablespoon, Mul(64.0)),
    (Quart, Teaspoon, Mul(192.0)),
    (Quart, Fluid, Mul(40.0)),
    (Fluid, Milliliter, Mul(28.413)),
    (Fluid, Deciliter, Div(3.52)),
    (Fluid, Liter, Div(35.195)),
    (Fluid, Cup, Div(10.0)),
    (Fluid, Gill, Div(4.163)),
    (Fluid, Pint, Div(20.0)),
    (Fluid, Quart, Div(40.0)),
    (Fluid, Gallon, Div(160.0)),
    (Fluid, Tablespoon, Mul(1.6)),
    (Fluid, Teaspoon, Mul(4.8)),
    // Length
    (Millimeter, Inch, Div(25.4)),
    (Centimeter, Inch, Div(2.54)),
    (Meter, Inch, Mul(39.37)),
    (Inch, Millimeter, Mul(25.4)),
    (Inch, Centimeter, Mul(2.54)),
    (Inch, Meter, Div(39.37)),
];

/// Read-only after first access
static CONVERSION_TABLE: Lazy<HashMap<(Unit, Unit), Conversion>> = Lazy::new(|| {
    CONVERSIONS
        .iter()
        .map(|&(from, to, conversion)| ((from, to), conversion))
        .collect()
});

pub(super) fn lookup(from: Unit, to: Unit) -> Option<Conversion> {
    CONVERSION_TABLE.get(&(from, to)).copied()
}
