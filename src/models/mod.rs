//! Core data models for the vending machine
//!
//! Plain value types shared by the services, the display layer and the
//! interactive session.

pub mod item;
pub mod money;
pub mod purchases;

pub use item::{Item, ItemValidationError};
pub use money::{Money, MoneyParseError};
pub use purchases::PersonalInventory;
