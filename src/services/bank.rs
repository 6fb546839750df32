//! Cash register
//!
//! Holds the customer's spendable balance. A deduction larger than the
//! balance is refused, so the balance never drops below zero.

use tracing::debug;

use crate::error::{VendingError, VendingResult};
use crate::models::Money;

#[derive(Debug, Clone, Default)]
pub struct Bank {
    balance: Money,
}

impl Bank {
    pub fn new(balance: Money) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Add cash to the balance
    pub fn add_money(&mut self, amount: Money) {
        self.balance += amount;
        debug!(%amount, balance = %self.balance, "money added");
    }

    /// Take `amount` out of the balance
    ///
    /// Leaves the balance untouched and returns `InsufficientFunds` when the
    /// balance is smaller than `amount`.
    pub fn deduct_money(&mut self, amount: Money) -> VendingResult<()> {
        match self.balance.checked_deduct(amount) {
            Some(remaining) => {
                self.balance = remaining;
                debug!(%amount, balance = %self.balance, "money deducted");
                Ok(())
            }
            None => Err(VendingError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            }),
        }
    }
}
