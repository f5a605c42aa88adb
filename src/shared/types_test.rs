//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

#[cfg(test)]
mod tests {
    use crate::core::features::unit_converter::{Unit, UnitGroup};
    use crate::shared::types::*;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        // Writes bindings/shopping_list.ts for the mobile client
        Unit::export().expect("Failed to export Unit");
        UnitGroup::export().expect("Failed to export UnitGroup");
        Item::export().expect("Failed to export Item");
        SortAndFilterSettings::export().expect("Failed to export SortAndFilterSettings");
        ConvertUnitsResponse::export().expect("Failed to export ConvertUnitsResponse");
    }

    #[test]
    fn item_uses_camel_case_on_the_wire() {
        let json = r#"{
            "id": "1",
            "name": "Milk",
            "description": "",
            "totalAmount": 2,
            "currentAmount": 1,
            "unit": "LITER",
            "bought": false,
            "tags": ["dairy"]
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.unit, Unit::Liter);
        assert_eq!(item.total_amount, 2.0);
        assert_eq!(item.tags, vec!["dairy".to_string()]);
    }

    #[test]
    fn sort_setting_wire_format() {
        let setting = SortSetting {
            key: SortKey::CurrentAmount,
            order: Order::Asc,
            selected: true,
        };
        let json = serde_json::to_string(&setting).unwrap();
        assert_eq!(json, r#"{"key":"currentAmount","order":"ASC","selected":true}"#);
    }
}
