//! Machine settings
//!
//! The starting balance and the stock list. Every field has a default, so a
//! missing or partial `config.json` still yields the standard machine:
//! five snacks in slots "1".."5" and $200.00 to spend. Settings are only
//! read, never written back.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::paths::VendingPaths;
use crate::error::VendingError;
use crate::models::{Item, Money};
use crate::services::{Bank, Inventory};

/// One stocked slot as written in the settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    /// Inventory key the item is stored under
    pub slot: String,
    pub name: String,
    /// Price in cents
    pub price: Money,
    /// Code shown to the customer
    pub code: String,
}

impl StockEntry {
    pub fn new(slot: &str, name: &str, price: Money, code: &str) -> Self {
        Self {
            slot: slot.to_string(),
            name: name.to_string(),
            price,
            code: code.to_string(),
        }
    }

    pub fn to_item(&self) -> Item {
        Item::new(self.name.clone(), self.price, self.code.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Balance the customer starts with, in cents
    #[serde(default = "default_starting_balance")]
    pub starting_balance: Money,

    /// Items loaded into the machine, in display order
    #[serde(default = "default_stock")]
    pub stock: Vec<StockEntry>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_starting_balance() -> Money {
    Money::from_dollars(200)
}

fn default_stock() -> Vec<StockEntry> {
    vec![
        StockEntry::new("1", "Cola", Money::from_dollars(15), "A1"),
        StockEntry::new("2", "Fanta", Money::from_dollars(15), "A2"),
        StockEntry::new("3", "Chips", Money::from_dollars(10), "A3"),
        StockEntry::new("4", "Snicker", Money::from_dollars(20), "A4"),
        StockEntry::new("5", "Bounty", Money::from_dollars(20), "A5"),
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            starting_balance: default_starting_balance(),
            stock: default_stock(),
        }
    }
}

impl Settings {
    /// Load `config.json` from the config directory, or use defaults if it
    /// doesn't exist
    pub fn load_or_default(paths: &VendingPaths) -> Result<Self, VendingError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            Self::load_from(&settings_path)
        } else {
            debug!(path = %settings_path.display(), "no settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load settings from the platform config directory
    ///
    /// When no config directory can be resolved (no `HOME`, no
    /// `XDG_CONFIG_HOME`, no override) the defaults are used.
    pub fn discover() -> Result<Self, VendingError> {
        match VendingPaths::new() {
            Ok(paths) => Self::load_or_default(&paths),
            Err(err) => {
                info!(error = %err, "no config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load settings from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, VendingError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            VendingError::Io(format!("Failed to read settings file {}: {}", path.display(), e))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            VendingError::Config(format!("Failed to parse settings file {}: {}", path.display(), e))
        })?;
        settings.validate()?;

        info!(path = %path.display(), items = settings.stock.len(), "loaded settings");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), VendingError> {
        if self.starting_balance.is_negative() {
            return Err(VendingError::Validation(format!(
                "Starting balance cannot be negative ({})",
                self.starting_balance
            )));
        }
        Ok(())
    }

    /// Build the inventory from the stock list
    ///
    /// Fails on a repeated slot key or an invalid item.
    pub fn seed_inventory(&self) -> Result<Inventory, VendingError> {
        let mut inventory = Inventory::new();
        for entry in &self.stock {
            inventory.add_item(entry.slot.clone(), entry.to_item())?;
        }
        Ok(inventory)
    }

    pub fn opening_bank(&self) -> Bank {
        Bank::new(self.starting_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.starting_balance, Money::from_cents(20000));
        assert_eq!(settings.stock.len(), 5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_default_inventory() {
        let inventory = Settings::default().seed_inventory().unwrap();
        let rows: Vec<(&str, &str, &str)> = inventory
            .all_items()
            .map(|(slot, item)| (slot, item.code(), item.name()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("1", "A1", "Cola"),
                ("2", "A2", "Fanta"),
                ("3", "A3", "Chips"),
                ("4", "A4", "Snicker"),
                ("5", "A5", "Bounty"),
            ]
        );
        assert_eq!(inventory.get_item("3").unwrap().price(), Money::from_dollars(10));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VendingPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.starting_balance, Money::from_dollars(200));
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VendingPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{ "starting_balance": 500 }"#).unwrap();

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.starting_balance, Money::from_cents(500));
        assert_eq!(settings.stock.len(), 5);
    }

    #[test]
    fn test_custom_stock() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("machine.json");
        std::fs::write(
            &path,
            r#"{ "stock": [ { "slot": "1", "name": "Water", "price": 250, "code": "B1" } ] }"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        let inventory = settings.seed_inventory().unwrap();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.resolve("B1").unwrap().price(), Money::from_cents(250));
    }

    #[test]
    fn test_duplicate_slot_fails() {
        let mut settings = Settings::default();
        settings
            .stock
            .push(StockEntry::new("1", "Water", Money::from_dollars(3), "B1"));

        let err = settings.seed_inventory().unwrap_err();
        assert!(matches!(err, VendingError::Duplicate { .. }));
    }

    #[test]
    fn test_negative_balance_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "starting_balance": -100 }"#).unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, VendingError::Config(_)));
    }
}
