//! Vending machine - interactive terminal simulation
//!
//! A customer starts with a cash balance, browses a fixed stock of snacks,
//! and buys items through a numbered text menu.
//!
//! # Architecture
//!
//! - `config`: settings file location and contents (balance, stock)
//! - `error`: custom error types
//! - `models`: money, items, the customer's purchases
//! - `services`: inventory, cash register, vending machine
//! - `display`: text formatting for the menu dialogue
//! - `session`: console abstraction and the menu loop
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust,no_run
//! use vending_machine::config::Settings;
//! use vending_machine::session::LineConsole;
//!
//! let mut console = LineConsole::stdio();
//! vending_machine::run(&Settings::default(), &mut console)?;
//! # Ok::<(), vending_machine::VendingError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;

pub use error::{VendingError, VendingResult};

use config::Settings;
use services::VendingMachine;
use session::{Console, SessionEnd, User};

/// Build the machine described by `settings`
pub fn build_machine(settings: &Settings) -> VendingResult<VendingMachine> {
    settings.validate()?;
    let inventory = settings.seed_inventory()?;
    Ok(VendingMachine::new(inventory, settings.opening_bank()))
}

/// Build the machine, seat one customer at it and run the menu loop
pub fn run<C: Console>(settings: &Settings, console: &mut C) -> VendingResult<SessionEnd> {
    let mut machine = build_machine(settings)?;
    let mut user = User::new(&mut machine);
    user.start(console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::session::LineConsole;
    use std::io::Cursor;

    #[test]
    fn test_build_default_machine() {
        let machine = build_machine(&Settings::default()).unwrap();
        assert_eq!(machine.balance(), Money::from_dollars(200));
        assert_eq!(machine.inventory().len(), 5);
    }

    #[test]
    fn test_run_scripted_session() {
        let mut console = LineConsole::new(Cursor::new("1\nA1\n2\n4\n"), Vec::new());
        let end = run(&Settings::default(), &mut console).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();

        assert_eq!(end, SessionEnd::Exited);
        assert!(output.contains("A5: Bounty - $20.00\n"));
        assert!(output.contains("Your balance: $185.00\n"));
    }

    #[test]
    fn test_run_rejects_bad_settings() {
        let mut settings = Settings::default();
        settings.starting_balance = Money::from_cents(-1);
        let mut console = LineConsole::new(Cursor::new(""), Vec::new());

        assert!(run(&settings, &mut console).unwrap_err().is_validation());
    }
}
