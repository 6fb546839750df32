//! Interactive customer session
//!
//! Menu parsing, the console abstraction, and the [`User`] that runs the
//! menu loop against a [`crate::services::VendingMachine`].

pub mod console;
pub mod menu;
pub mod user;

pub use console::{Console, LineConsole};
pub use menu::MenuChoice;
pub use user::{SessionEnd, User};
