//! Display formatting for terminal output
//!
//! Every function returns the finished text, one `\n`-terminated line per
//! row, so the session can hand it straight to the console.

use std::fmt::Write;

use crate::models::{Money, PersonalInventory};
use crate::services::Inventory;

/// Main menu shown before every choice
pub fn format_menu() -> String {
    let mut output = String::from("\n");
    for (number, label) in ["Vending Machine", "The Bank", "Your Inventory", "Exit"]
        .iter()
        .enumerate()
    {
        let _ = writeln!(output, "{}. {}", number + 1, label);
    }
    output
}

/// Stocked items as `<code>: <name> - <price>`, in stocking order
pub fn format_inventory(inventory: &Inventory) -> String {
    let mut output = String::from("Items available:\n");
    for (_, item) in inventory.all_items() {
        let _ = writeln!(output, "{}: {} - {}", item.code(), item.name(), item.price());
    }
    output
}

pub fn format_balance(balance: Money) -> String {
    format!("Your balance: {}\n", balance)
}

/// The customer's purchases, or a note that there are none
pub fn format_personal_inventory(purchases: &PersonalInventory) -> String {
    let mut output = String::from("\nYour Inventory\n");

    if purchases.is_empty() {
        output.push_str("Your inventory is empty.\n");
        return output;
    }

    for item in purchases.items() {
        let _ = writeln!(output, "{}", item);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    #[test]
    fn test_format_menu() {
        assert_eq!(
            format_menu(),
            "\n1. Vending Machine\n2. The Bank\n3. Your Inventory\n4. Exit\n"
        );
    }

    #[test]
    fn test_format_inventory_uses_item_codes() {
        let mut inventory = Inventory::new();
        inventory
            .add_item("1", Item::new("Cola", Money::from_dollars(15), "A1"))
            .unwrap();
        inventory
            .add_item("2", Item::new("Chips", Money::from_cents(1050), "A3"))
            .unwrap();

        assert_eq!(
            format_inventory(&inventory),
            "Items available:\nA1: Cola - $15.00\nA3: Chips - $10.50\n"
        );
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(
            format_balance(Money::from_dollars(200)),
            "Your balance: $200.00\n"
        );
    }

    #[test]
    fn test_format_empty_personal_inventory() {
        let output = format_personal_inventory(&PersonalInventory::new());
        assert_eq!(output, "\nYour Inventory\nYour inventory is empty.\n");
    }

    #[test]
    fn test_format_personal_inventory() {
        let mut purchases = PersonalInventory::new();
        purchases.add(Item::new("Cola", Money::from_dollars(15), "A1"));
        purchases.add(Item::new("Bounty", Money::from_dollars(20), "A5"));

        assert_eq!(
            format_personal_inventory(&purchases),
            "\nYour Inventory\nCola - $15.00\nBounty - $20.00\n"
        );
    }
}
