//! Configuration module for the vending machine
//!
//! - Platform path resolution for the optional settings file
//! - Settings: starting balance and stock list

pub mod paths;
pub mod settings;

pub use paths::VendingPaths;
pub use settings::{Settings, StockEntry};
