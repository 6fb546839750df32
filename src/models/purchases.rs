//! Personal inventory
//!
//! The items a customer has bought this session, oldest first.

use super::item::Item;
use super::money::Money;

/// Append-only list of purchased items
#[derive(Debug, Clone, Default)]
pub struct PersonalInventory {
    items: Vec<Item>,
}

impl PersonalInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the prices paid
    pub fn total_spent(&self) -> Money {
        self.items.iter().map(Item::price).sum()
    }
}
