use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::core::features::unit_converter::Unit;

// ============================================================================
// Shopping list items (owned by the host, read by the core)
// ============================================================================

/// A shopping list entry as delivered by the items API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "shopping_list.ts")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub total_amount: f64,
    pub current_amount: f64,
    pub unit: Unit,
    pub bought: bool,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export, export_to = "shopping_list.ts")]
pub enum Order {
    Asc,
    Desc,
}

/// Item fields the list view can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "shopping_list.ts")]
pub enum SortKey {
    Name,
    CurrentAmount,
    TotalAmount,
    Bought,
    Description,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "shopping_list.ts")]
pub struct SortSetting {
    pub key: SortKey,
    pub order: Order,
    pub selected: bool,
}

/// Ephemeral list view state. Lives as long as the list screen does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "shopping_list.ts")]
pub struct SortAndFilterSettings {
    pub filter_tags: Vec<String>,
    pub search_text: String,
    pub sort: Vec<SortSetting>,
}

/// A tag offered in the filter overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "shopping_list.ts")]
pub struct TagOption {
    pub name: String,
    pub checked: bool,
}

// ============================================================================
// Command DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "shopping_list.ts")]
pub struct ConvertUnitsRequest {
    pub amount: f64,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "shopping_list.ts")]
pub struct ConvertUnitsResponse {
    pub result: f64,
    pub formatted_result: String,
    pub from_unit: Unit,
    pub to_unit: Unit,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "shopping_list.ts")]
pub struct ParseUnitResponse {
    pub amount: f64,
    pub unit: Unit,
    pub group: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "shopping_list.ts")]
pub struct GetUnitsResponse {
    pub units: Vec<UnitDTO>,
}

// Unit entry for picker controls
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "shopping_list.ts")]
pub struct UnitDTO {
    pub id: String,           // Unit identifier (e.g., "GRAM")
    pub label: String,        // Display name (e.g., "Gram")
    pub abbreviation: String, // Short token (e.g., "g")
    pub group: String,        // Group identifier (e.g., "MASS")
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "shopping_list.ts")]
pub struct SortAndFilterRequest {
    pub items: Vec<Item>,
    pub settings: SortAndFilterSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "shopping_list.ts")]
pub struct SortAndFilterResponse {
    pub items: Vec<Item>,
    pub total: usize,
}
