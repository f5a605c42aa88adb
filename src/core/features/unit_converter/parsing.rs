//! Amount parsing and formatting for converter inputs and free text.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

use super::Unit;
use crate::shared::error::{AppError, AppResult};

const ERR_CANNOT_PARSE_QUANTITY: &str = "Could not parse quantity from text";

// Leading number of an input field; anything after it is ignored
static RE_LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?|[+-]?Infinity)")
        .expect("Failed to compile leading number regex")
});

// "250 g", "2kg", "1.5 fluid ounces"
static RE_AMOUNT_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-]?\d+(?:\.\d+)?)\s*([a-zA-Z]+(?:\s+[a-zA-Z]+)?)")
        .expect("Failed to compile amount-first regex")
});

// "kg 2"
static RE_UNIT_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z]+)\s*([+-]?\d+(?:\.\d+)?)")
        .expect("Failed to compile unit-first regex")
});

// "1,000" groups thousands, "1,5" is a decimal comma
static RE_THOUSANDS_COMMA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d),(\d{3})(\D|$)").expect("Failed to compile thousands separator regex")
});

static RE_DECIMAL_COMMA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d),(\d{1,2})(\D|$)").expect("Failed to compile decimal comma regex")
});

static RE_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-]?\d+(?:\.\d+)?)").expect("Failed to compile number regex")
});

/// Leading number of `text`, if it starts with one
pub fn leading_number(text: &str) -> Option<f64> {
    RE_LEADING_NUMBER
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .filter(|value| !value.is_nan())
}

/// Parse an amount typed into an input field. Unparsable input is `0`.
pub fn parse_amount(text: &str) -> f64 {
    leading_number(text).unwrap_or(0.0)
}

/// Fixed-point display of a converted amount. Ties round away from zero,
/// so `0.0625` shows as `"0.063"`.
pub fn format_amount(value: f64, precision: usize) -> String {
    match Decimal::from_f64_retain(value) {
        Some(decimal) => {
            let rounded = decimal
                .round_dp_with_strategy(precision as u32, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", precision, rounded)
        }
        // Out of Decimal range (or not finite)
        None => format!("{:.*}", precision, value),
    }
}

/// Extract the first amount/unit pair from free text, e.g. `"2 kg of flour"`.
///
/// A number without a recognizable unit is a count of items.
pub fn parse_quantity(text: &str) -> AppResult<(f64, Unit)> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Empty text".to_string()));
    }

    let normalized_text = normalize_separators(text);

    if let Some(caps) = RE_AMOUNT_FIRST.captures(&normalized_text) {
        if let Ok(amount) = caps[1].parse::<f64>() {
            let words = &caps[2];
            // "2 fl oz" needs both words, "2 kg sugar" only the first
            let unit = normalize_unit(words).or_else(|| {
                words.split_whitespace().next().and_then(normalize_unit)
            });
            if let Some(unit) = unit {
                log::debug!("[parse_quantity] Extracted: {} {} from '{}'", amount, unit, text);
                return Ok((amount, unit));
            }
        }
    }

    if let Some(caps) = RE_UNIT_FIRST.captures(&normalized_text) {
        if let (Some(unit), Ok(amount)) = (normalize_unit(&caps[1]), caps[2].parse::<f64>()) {
            log::debug!("[parse_quantity] Extracted: {} {} from '{}'", amount, unit, text);
            return Ok((amount, unit));
        }
    }

    if let Some(caps) = RE_NUMBER.captures(&normalized_text) {
        if let Ok(amount) = caps[1].parse::<f64>() {
            log::debug!("[parse_quantity] No unit in '{}', counting items", text);
            return Ok((amount, Unit::Item));
        }
    }

    log::debug!("[parse_quantity] Failed to parse: '{}'", text);
    Err(AppError::Validation(format!("{}: {}", ERR_CANNOT_PARSE_QUANTITY, text)))
}

fn normalize_separators(text: &str) -> String {
    let mut normalized = text.to_string();
    // Matches consume the trailing separator, so "1,000,000" needs two passes
    while RE_THOUSANDS_COMMA.is_match(&normalized) {
        normalized = RE_THOUSANDS_COMMA.replace_all(&normalized, "$1$2$3").into_owned();
    }
    RE_DECIMAL_COMMA.replace_all(&normalized, "$1.$2$3").into_owned()
}

/// Map a written unit (abbreviation, singular, plural) to a [`Unit`]
pub fn normalize_unit(unit: &str) -> Option<Unit> {
    let unit_lower = unit
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    match unit_lower.as_str() {
        "pc" | "pcs" | "piece" | "pieces" | "item" | "items" => Some(Unit::Item),
        // Mass
        "mg" | "milligram" | "milligrams" | "milligramme" | "milligrammes" => Some(Unit::Milligram),
        "g" | "gr" | "gram" | "grams" | "gramme" | "grammes" => Some(Unit::Gram),
        "kg" | "kilo" | "kilos" | "kilogram" | "kilograms" => Some(Unit::Kilogram),
        "lb" | "lbs" | "pound" | "pounds" => Some(Unit::Pound),
        "oz" | "ounce" | "ounces" => Some(Unit::Ounce),
        // Volume
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Some(Unit::Milliliter),
        "dl" | "deciliter" | "deciliters" | "decilitre" | "decilitres" => Some(Unit::Deciliter),
        "l" | "liter" | "liters" | "litre" | "litres" => Some(Unit::Liter),
        "c" | "cup" | "cups" => Some(Unit::Cup),
        "pt" | "pint" | "pints" => Some(Unit::Pint),
        "tbs" | "tbsp" | "tablespoon" | "tablespoons" => Some(Unit::Tablespoon),
        "tsp" | "teaspoon" | "teaspoons" => Some(Unit::Teaspoon),
        "fl oz" | "floz" | "fluid" | "fluid ounce" | "fluid ounces" => Some(Unit::Fluid),
        "qt" | "quart" | "quarts" => Some(Unit::Quart),
        "gl" | "gal" | "gallon" | "gallons" => Some(Unit::Gallon),
        "gi" | "gill" | "gills" => Some(Unit::Gill),
        // Length
        "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => Some(Unit::Millimeter),
        "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => Some(Unit::Centimeter),
        "m" | "meter" | "meters" | "metre" | "metres" => Some(Unit::Meter),
        "in" | "inch" | "inches" => Some(Unit::Inch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::unit_converter::convert;

    #[test]
    fn test_parse_amount_reads_leading_number() {
        assert_eq!(parse_amount("12"), 12.0);
        assert_eq!(parse_amount("  3.5"), 3.5);
        assert_eq!(parse_amount("2abc"), 2.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("1."), 1.0);
        assert_eq!(parse_amount("-4"), -4.0);
        assert_eq!(parse_amount("1e3"), 1000.0);
        assert_eq!(parse_amount("1e"), 1.0);
    }

    #[test]
    fn test_parse_amount_defaults_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
        assert!(leading_number("x1").is_none());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(2.0, 3), "2.000");
        assert_eq!(format_amount(0.03527, 3), "0.035");
        assert_eq!(format_amount(1.5, 0), "2");
        assert_eq!(format_amount(1234.5, 1), "1234.5");
    }

    #[test]
    fn test_format_amount_rounds_ties_away_from_zero() {
        assert_eq!(format_amount(0.0625, 3), "0.063");
        assert_eq!(format_amount(2.5, 0), "3");
        assert_eq!(format_amount(-2.5, 0), "-3");
        assert_eq!(format_amount(0.125, 2), "0.13");
    }

    #[test]
    fn test_format_amount_tablespoon_in_cups() {
        let cups = convert(1.0, Unit::Tablespoon, Unit::Cup);
        assert_eq!(format_amount(cups, 3), "0.063");
    }

    #[test]
    fn test_parse_quantity_amount_first() {
        assert_eq!(parse_quantity("250 g").unwrap(), (250.0, Unit::Gram));
        assert_eq!(parse_quantity("2kg").unwrap(), (2.0, Unit::Kilogram));
        assert_eq!(parse_quantity("1,5 l").unwrap(), (1.5, Unit::Liter));
        assert_eq!(parse_quantity("3 cups of milk").unwrap(), (3.0, Unit::Cup));
        assert_eq!(parse_quantity("2 fl oz").unwrap(), (2.0, Unit::Fluid));
        assert_eq!(parse_quantity("2 kg sugar").unwrap(), (2.0, Unit::Kilogram));
    }

    #[test]
    fn test_parse_quantity_comma_separators() {
        assert_eq!(parse_quantity("1,000 g").unwrap(), (1000.0, Unit::Gram));
        assert_eq!(parse_quantity("1,000,000 mg").unwrap(), (1000000.0, Unit::Milligram));
        assert_eq!(parse_quantity("1,25 kg").unwrap(), (1.25, Unit::Kilogram));
        assert_eq!(parse_quantity("0,5l").unwrap(), (0.5, Unit::Liter));
        assert_eq!(normalize_separators("2,5 cups, 3 eggs"), "2.5 cups, 3 eggs");
    }

    #[test]
    fn test_parse_quantity_unit_first() {
        assert_eq!(parse_quantity("tbsp 2").unwrap(), (2.0, Unit::Tablespoon));
    }

    #[test]
    fn test_parse_quantity_without_unit_counts_items() {
        assert_eq!(parse_quantity("6 eggs").unwrap(), (6.0, Unit::Item));
        assert_eq!(parse_quantity("4").unwrap(), (4.0, Unit::Item));
    }

    #[test]
    fn test_parse_quantity_rejects_text_without_number() {
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("some flour").is_err());
    }

    #[test]
    fn test_normalize_unit_aliases() {
        assert_eq!(normalize_unit("Grams"), Some(Unit::Gram));
        assert_eq!(normalize_unit("fluid   ounce"), Some(Unit::Fluid));
        assert_eq!(normalize_unit("stone"), None);
    }
}
