//! Item model
//!
//! A product the machine sells. Items are immutable once built; a purchase
//! hands the buyer a copy of the stocked item.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A product stocked in the machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    price: Money,
    /// Customer-facing code printed on the machine (e.g. "A1")
    code: String,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Money, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            code: code.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Validate the item
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }

        if self.code.trim().is_empty() {
            return Err(ItemValidationError::EmptyCode);
        }

        if self.price.is_negative() {
            return Err(ItemValidationError::NegativePrice(self.price));
        }

        Ok(())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.price)
    }
}

/// Validation errors for items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyName,
    EmptyCode,
    NegativePrice(Money),
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Item name cannot be empty"),
            Self::EmptyCode => write!(f, "Item code cannot be empty"),
            Self::NegativePrice(price) => write!(f, "Item price cannot be negative ({})", price),
        }
    }
}

impl std::error::Error for ItemValidationError {}
