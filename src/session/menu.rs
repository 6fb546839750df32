//! Main menu choices

use crate::error::{VendingError, VendingResult};

/// An entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1. Vending Machine
    Buy,
    /// 2. The Bank
    Balance,
    /// 3. Your Inventory
    Inventory,
    /// 4. Exit
    Exit,
}

impl MenuChoice {
    /// Parse a line typed at the menu prompt
    ///
    /// Input that is not a 32-bit integer is `InvalidInput`; a number
    /// outside 1-4 is `InvalidChoice`.
    pub fn parse(input: &str) -> VendingResult<Self> {
        let trimmed = input.trim();
        let number: i32 = trimmed
            .parse()
            .map_err(|_| VendingError::InvalidInput(trimmed.to_string()))?;

        match number {
            1 => Ok(Self::Buy),
            2 => Ok(Self::Balance),
            3 => Ok(Self::Inventory),
            4 => Ok(Self::Exit),
            other => Err(VendingError::InvalidChoice(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("1").unwrap(), MenuChoice::Buy);
        assert_eq!(MenuChoice::parse(" 2 ").unwrap(), MenuChoice::Balance);
        assert_eq!(MenuChoice::parse("3").unwrap(), MenuChoice::Inventory);
        assert_eq!(MenuChoice::parse("+4").unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn test_parse_non_numeric() {
        for input in ["", "one", "1.0", "A1", "3000000000", "-2147483649"] {
            assert!(matches!(
                MenuChoice::parse(input),
                Err(VendingError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        for (input, expected) in [("0", 0), ("5", 5), ("-1", -1), ("2147483647", i32::MAX)] {
            match MenuChoice::parse(input) {
                Err(VendingError::InvalidChoice(n)) => assert_eq!(n, expected),
                other => panic!("unexpected result for {input}: {other:?}"),
            }
        }
    }
}
