//! Command functions exposed to the host application
//!
//! Each command takes and returns the DTOs from `shared::types`, so the
//! bridge only has to (de)serialize JSON.

use crate::config::AppSettings;
use crate::core::features::list_view::apply;
use crate::core::features::unit_converter::{
    abbreviate, convert, format_amount, parse_quantity, translate, units_in_group, Unit,
    UnitGroup,
};
use crate::shared::error::AppResult;
use crate::shared::types::{
    ConvertUnitsRequest, ConvertUnitsResponse, GetUnitsResponse, ParseUnitResponse,
    SortAndFilterRequest, SortAndFilterResponse, SortAndFilterSettings, UnitDTO,
};

// ============================================================================
// Settings
// ============================================================================

pub fn get_settings_command() -> AppResult<AppSettings> {
    AppSettings::load()
}

pub fn save_settings_command(settings: AppSettings) -> AppResult<()> {
    settings.save()
}

// ============================================================================
// Unit converter
// ============================================================================

/// Convert an amount between two unit identifiers, e.g. `"KILOGRAM"`,
/// formatted with the saved display precision
pub fn convert_units_command(request: ConvertUnitsRequest) -> AppResult<ConvertUnitsResponse> {
    convert_units_with_settings(request, &AppSettings::load()?)
}

pub fn convert_units_with_settings(
    request: ConvertUnitsRequest,
    settings: &AppSettings,
) -> AppResult<ConvertUnitsResponse> {
    let from_unit: Unit = request.from_unit.parse()?;
    let to_unit: Unit = request.to_unit.parse()?;

    let result = convert(request.amount, from_unit, to_unit);
    let formatted_result = format_amount(result, settings.display_precision);

    Ok(ConvertUnitsResponse {
        result,
        formatted_result,
        from_unit,
        to_unit,
    })
}

/// Every unit, grouped and in picker order
pub fn get_all_units_command() -> AppResult<GetUnitsResponse> {
    let units = UnitGroup::ALL
        .iter()
        .flat_map(|&group| units_in_group(group))
        .map(|&unit| unit_dto(unit))
        .collect();
    Ok(GetUnitsResponse { units })
}

pub fn get_units_for_group_command(group: String) -> AppResult<GetUnitsResponse> {
    let group: UnitGroup = group.parse()?;
    let units = units_in_group(group).iter().map(|&unit| unit_dto(unit)).collect();
    Ok(GetUnitsResponse { units })
}

/// Parse free text such as `"2 kg"` into amount, unit and group
pub fn parse_text_command(text: String) -> AppResult<ParseUnitResponse> {
    let (amount, unit) = parse_quantity(&text)?;
    Ok(ParseUnitResponse {
        amount,
        unit,
        group: unit.group().to_string(),
    })
}

// ============================================================================
// List view
// ============================================================================

/// Fresh list view state for a newly opened list
pub fn get_list_settings_command() -> AppResult<SortAndFilterSettings> {
    Ok(SortAndFilterSettings::from_settings(&AppSettings::load()?))
}

pub fn sort_and_filter_command(request: SortAndFilterRequest) -> AppResult<SortAndFilterResponse> {
    let items = apply(&request.items, &request.settings);
    Ok(SortAndFilterResponse {
        items,
        total: request.items.len(),
    })
}

fn unit_dto(unit: Unit) -> UnitDTO {
    UnitDTO {
        id: unit.as_str().to_string(),
        label: translate(unit),
        abbreviation: abbreviate(unit).to_string(),
        group: unit.group().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::items;
    use crate::shared::error::AppError;
    use crate::shared::types::{Item, Order, SortKey};
    use tempfile::TempDir;

    fn request(amount: f64, from_unit: &str, to_unit: &str) -> ConvertUnitsRequest {
        ConvertUnitsRequest {
            amount,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
        }
    }

    fn convert_with_defaults(request: ConvertUnitsRequest) -> AppResult<ConvertUnitsResponse> {
        convert_units_with_settings(request, &AppSettings::default())
    }

    #[test]
    fn test_convert_units() {
        let response = convert_with_defaults(request(1500.0, "GRAM", "KILOGRAM")).unwrap();
        assert_eq!(response.result, 1.5);
        assert_eq!(response.formatted_result, "1.500");
        assert_eq!(response.from_unit, Unit::Gram);
        assert_eq!(response.to_unit, Unit::Kilogram);
    }

    #[test]
    fn test_convert_units_accepts_lowercase_ids() {
        let response = convert_with_defaults(request(2.0, "cup", "milliliter")).unwrap();
        assert_eq!(response.result, 568.0);
    }

    #[test]
    fn test_convert_units_rejects_unknown_unit() {
        let err = convert_with_defaults(request(1.0, "PARSEC", "METER")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_saved_settings_change_command_results() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        AppSettings {
            display_precision: 1,
            default_sort_order: Order::Asc,
            ..AppSettings::default()
        }
        .save_to(&path)
        .unwrap();
        let settings = AppSettings::load_from(&path).unwrap();

        let default_response = convert_with_defaults(request(1.0, "GRAM", "OUNCE")).unwrap();
        assert_eq!(default_response.formatted_result, "0.035");
        let response = convert_units_with_settings(request(1.0, "GRAM", "OUNCE"), &settings).unwrap();
        assert_eq!(response.formatted_result, "0.0");
        let response =
            convert_units_with_settings(request(2.5, "KILOGRAM", "GRAM"), &settings).unwrap();
        assert_eq!(response.formatted_result, "2500.0");

        let list_settings = SortAndFilterSettings::from_settings(&settings);
        assert_eq!(list_settings.active_sort(), (SortKey::Name, Order::Asc));
        let items = vec![
            Item { name: "Milk".to_string(), ..items::blank() },
            Item { name: "Bread".to_string(), ..items::blank() },
        ];
        let response = sort_and_filter_command(SortAndFilterRequest {
            items,
            settings: list_settings,
        })
        .unwrap();
        let names: Vec<&str> = response.items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Bread", "Milk"]);
    }

    #[test]
    fn test_get_all_units_command() {
        let response = get_all_units_command().unwrap();
        assert_eq!(response.units.len(), Unit::ALL.len());
        assert_eq!(response.units[0].id, "ITEM");

        let fluid = response.units.iter().find(|unit| unit.id == "FLUID").unwrap();
        assert_eq!(fluid.label, "Fluid ounce");
        assert_eq!(fluid.abbreviation, "fl oz");
        assert_eq!(fluid.group, "VOLUME");
    }

    #[test]
    fn test_get_units_for_group_command() {
        let response = get_units_for_group_command("mass".to_string()).unwrap();
        let ids: Vec<&str> = response.units.iter().map(|unit| unit.id.as_str()).collect();
        assert_eq!(ids.len(), units_in_group(UnitGroup::Mass).len());
        assert!(ids.contains(&"KILOGRAM"));
        assert!(response.units.iter().all(|unit| unit.group == "MASS"));

        assert!(get_units_for_group_command("speed".to_string()).is_err());
    }

    #[test]
    fn test_parse_text_command() {
        let response = parse_text_command("2 kg sugar".to_string()).unwrap();
        assert_eq!(response.amount, 2.0);
        assert_eq!(response.unit, Unit::Kilogram);
        assert_eq!(response.group, "MASS");

        let response = parse_text_command("6".to_string()).unwrap();
        assert_eq!(response.unit, Unit::Item);
        assert_eq!(response.group, "AMOUNT");

        assert!(parse_text_command("   ".to_string()).is_err());
    }

    #[test]
    fn test_sort_and_filter_command() {
        let milk = Item {
            name: "Milk".to_string(),
            tags: vec!["dairy".to_string()],
            ..items::blank()
        };
        let bread = Item {
            name: "Bread".to_string(),
            ..items::blank()
        };
        let settings = SortAndFilterSettings {
            filter_tags: vec!["dairy".to_string()],
            ..SortAndFilterSettings::default()
        };

        let response = sort_and_filter_command(SortAndFilterRequest {
            items: vec![milk, bread],
            settings,
        })
        .unwrap();
        assert_eq!(response.total, 2);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].name, "Milk");
    }
}
