//! Service layer for the vending machine
//!
//! Business logic over the data models: stocking and looking up items,
//! guarding the cash balance, and carrying out purchases.

pub mod bank;
pub mod inventory;
pub mod vending;

pub use bank::Bank;
pub use inventory::Inventory;
pub use vending::VendingMachine;
