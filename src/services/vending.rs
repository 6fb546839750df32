//! Vending machine service
//!
//! Ties the inventory to the cash register. A purchase either charges the
//! bank and hands the buyer the item, or changes nothing at all.

use tracing::{debug, info};

use crate::error::{VendingError, VendingResult};
use crate::models::{Item, Money, PersonalInventory};

use super::bank::Bank;
use super::inventory::Inventory;

#[derive(Debug, Clone)]
pub struct VendingMachine {
    inventory: Inventory,
    bank: Bank,
}

impl VendingMachine {
    pub fn new(inventory: Inventory, bank: Bank) -> Self {
        Self { inventory, bank }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn balance(&self) -> Money {
        self.bank.balance()
    }

    pub fn add_money(&mut self, amount: Money) {
        self.bank.add_money(amount);
    }

    /// Buy the item matching `code` for `buyer`
    ///
    /// Returns the purchased item. On `InvalidItemCode` or
    /// `InsufficientFunds` neither the balance nor the buyer's list changes.
    pub fn buy_item(&mut self, code: &str, buyer: &mut PersonalInventory) -> VendingResult<Item> {
        let Some(item) = self.inventory.resolve(code) else {
            debug!(%code, "purchase rejected: unknown item code");
            return Err(VendingError::InvalidItemCode(code.to_string()));
        };

        if let Err(err) = self.bank.deduct_money(item.price()) {
            debug!(
                %code,
                price = %item.price(),
                balance = %self.bank.balance(),
                "purchase rejected: insufficient funds"
            );
            return Err(err);
        }

        let item = item.clone();
        buyer.add(item.clone());
        info!(
            code = item.code(),
            name = item.name(),
            price = %item.price(),
            balance = %self.bank.balance(),
            "item purchased"
        );
        Ok(item)
    }
}
