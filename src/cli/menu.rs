//! Main menu options.

use std::str::FromStr;

/// One entry of the numbered main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// 0 - leave the program
    Exit,
    /// 1 - register a new product
    AddProduct,
    /// 2 - show every product
    ListProducts,
    /// 3 - sell units of a product
    SellProduct,
    /// 4 - show the value of all stock
    ShowTotalValue,
}

/// The operator typed something that is not a menu number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOption(pub String);

impl MenuOption {
    /// Menu entries in display order.
    pub const ALL: [Self; 5] = [
        Self::AddProduct,
        Self::ListProducts,
        Self::SellProduct,
        Self::ShowTotalValue,
        Self::Exit,
    ];

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Exit => 0,
            Self::AddProduct => 1,
            Self::ListProducts => 2,
            Self::SellProduct => 3,
            Self::ShowTotalValue => 4,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exit => "Exit",
            Self::AddProduct => "Add product",
            Self::ListProducts => "List products",
            Self::SellProduct => "Sell product",
            Self::ShowTotalValue => "Show total stock value",
        }
    }
}

impl FromStr for MenuOption {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(0) => Ok(Self::Exit),
            Ok(1) => Ok(Self::AddProduct),
            Ok(2) => Ok(Self::ListProducts),
            Ok(3) => Ok(Self::SellProduct),
            Ok(4) => Ok(Self::ShowTotalValue),
            _ => Err(InvalidOption(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_numbers() {
        assert_eq!("0".parse::<MenuOption>(), Ok(MenuOption::Exit));
        assert_eq!("1".parse::<MenuOption>(), Ok(MenuOption::AddProduct));
        assert_eq!(" 2 ".parse::<MenuOption>(), Ok(MenuOption::ListProducts));
        assert_eq!("3".parse::<MenuOption>(), Ok(MenuOption::SellProduct));
        assert_eq!("4".parse::<MenuOption>(), Ok(MenuOption::ShowTotalValue));
    }

    #[test]
    fn test_parse_rejects_other_input() {
        assert_eq!(
            "5".parse::<MenuOption>(),
            Err(InvalidOption("5".to_string()))
        );
        assert!("-1".parse::<MenuOption>().is_err());
        assert!("add".parse::<MenuOption>().is_err());
        assert!("".parse::<MenuOption>().is_err());
    }

    #[test]
    fn test_numbers_round_trip_through_parse() {
        for option in MenuOption::ALL {
            assert_eq!(option.number().to_string().parse::<MenuOption>(), Ok(option));
        }
    }
}
