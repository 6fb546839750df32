//! Machine inventory
//!
//! Items are stored under a slot key in the order they were stocked. Each
//! item also carries its own customer-facing code, so a stocked item can be
//! reached two ways: by slot key ("1") or by item code ("A1").

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{VendingError, VendingResult};
use crate::models::Item;

/// Insertion-ordered map from slot key to stocked item
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    slots: IndexMap<String, Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock an item under a slot key
    ///
    /// Fails if the slot is already taken or the item does not validate.
    pub fn add_item(&mut self, slot: impl Into<String>, item: Item) -> VendingResult<()> {
        let slot = slot.into();

        item.validate()
            .map_err(|e| VendingError::Validation(e.to_string()))?;

        if self.slots.contains_key(&slot) {
            return Err(VendingError::duplicate_slot(slot));
        }

        debug!(%slot, code = item.code(), name = item.name(), "stocked item");
        self.slots.insert(slot, item);
        Ok(())
    }

    /// Get the item stored under a slot key
    pub fn get_item(&self, slot: &str) -> Option<&Item> {
        self.slots.get(slot)
    }

    /// Find the item a customer asked for
    ///
    /// An exact slot key wins; otherwise the first item whose own code
    /// matches is returned.
    pub fn resolve(&self, input: &str) -> Option<&Item> {
        self.get_item(input)
            .or_else(|| self.slots.values().find(|item| item.code() == input))
    }

    /// All `(slot, item)` pairs in stocking order
    pub fn all_items(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.slots.iter().map(|(slot, item)| (slot.as_str(), item))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
