//! Client preferences for the converter and list screens
//!
//! Stored as JSON in the platform config directory. Missing fields fall
//! back to their defaults so older settings files keep loading.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use ts_rs::TS;
use directories::ProjectDirs;

use crate::core::features::unit_converter::UnitGroup;
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::Order;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "settings.ts")]
pub struct AppSettings {
    /// Decimal places shown for converted amounts
    pub display_precision: usize,
    /// Unit group the converter opens with
    pub default_group: UnitGroup,
    /// Direction every sort criterion starts with
    pub default_sort_order: Order,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            display_precision: 3,
            default_group: UnitGroup::Mass,
            default_sort_order: Order::Desc,
        }
    }
}

impl AppSettings {
    pub fn settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "antigravity", "shopping-list")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
            .ok_or_else(|| AppError::Config("Failed to determine config directory".to_string()))
    }

    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::settings_path()?)
    }

    /// Load settings from `path`, writing defaults first if the file is missing
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::warn!("[AppSettings] No settings at {}, writing defaults", path.display());
            let settings = Self::default();
            settings.save_to(path)?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
