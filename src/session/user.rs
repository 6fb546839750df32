//! The customer and the interactive menu loop
//!
//! A [`User`] drives one session: it shows the menu, reads a choice, and
//! dispatches to the vending machine until the customer picks Exit or the
//! input runs out. Bad input is reported and the menu is shown again.

use tracing::{debug, info};

use crate::display::{format_balance, format_inventory, format_menu, format_personal_inventory};
use crate::error::VendingResult;
use crate::models::{Item, PersonalInventory};
use crate::services::VendingMachine;

use super::console::Console;
use super::menu::MenuChoice;

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const CODE_PROMPT: &str = "Enter the code of the item you want to buy: ";
pub const FAREWELL: &str = "Thank you for using the vending machine. Goodbye!";

/// Typing this at the code prompt returns to the menu without buying
const BACK: &str = "back";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The customer chose Exit
    Exited,
    /// Input closed before Exit was chosen
    InputClosed,
}

pub struct User<'m> {
    machine: &'m mut VendingMachine,
    purchases: PersonalInventory,
}

impl<'m> User<'m> {
    pub fn new(machine: &'m mut VendingMachine) -> Self {
        Self {
            machine,
            purchases: PersonalInventory::new(),
        }
    }

    pub fn add_to_inventory(&mut self, item: Item) {
        self.purchases.add(item);
    }

    pub fn purchases(&self) -> &PersonalInventory {
        &self.purchases
    }

    pub fn machine(&self) -> &VendingMachine {
        &*self.machine
    }

    /// Run the menu loop until Exit or end of input
    ///
    /// Only console failures are returned as errors; every customer mistake
    /// is printed and the loop continues.
    pub fn start<C: Console>(&mut self, console: &mut C) -> VendingResult<SessionEnd> {
        loop {
            console.write(&format_menu())?;

            let Some(line) = console.prompt(CHOICE_PROMPT)? else {
                info!("input closed, ending session");
                return Ok(SessionEnd::InputClosed);
            };

            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(err) => {
                    debug!(input = %line, error = ?err, "menu input rejected");
                    console.write_line(&err.to_string())?;
                    continue;
                }
            };

            match choice {
                MenuChoice::Buy => {
                    if !self.buy_flow(console)? {
                        info!("input closed, ending session");
                        return Ok(SessionEnd::InputClosed);
                    }
                }
                MenuChoice::Balance => console.write(&format_balance(self.machine.balance()))?,
                MenuChoice::Inventory => {
                    console.write(&format_personal_inventory(&self.purchases))?
                }
                MenuChoice::Exit => {
                    console.write_line(FAREWELL)?;
                    info!(
                        purchases = self.purchases.len(),
                        spent = %self.purchases.total_spent(),
                        "session finished"
                    );
                    return Ok(SessionEnd::Exited);
                }
            }
        }
    }

    /// Show the stock, read a code and try to buy it
    ///
    /// Returns `false` if input closed at the code prompt.
    fn buy_flow<C: Console>(&mut self, console: &mut C) -> VendingResult<bool> {
        console.write(&format_inventory(self.machine.inventory()))?;

        let Some(line) = console.prompt(CODE_PROMPT)? else {
            return Ok(false);
        };
        if line.trim().eq_ignore_ascii_case(BACK) {
            debug!("purchase skipped");
            return Ok(true);
        }

        match self.machine.buy_item(&line, &mut self.purchases) {
            Ok(item) => console.write_line(&format!("You bought: {}", item.name()))?,
            Err(err) if err.is_recoverable() => console.write_line(&err.to_string())?,
            Err(err) => return Err(err),
        }

        Ok(true)
    }
}
