// src/application/menu.rs
//
// Numbered menu choices.

use std::fmt;
use std::str::FromStr;

pub const MENU_BANNER: &str = "\
================ Choose an option ================
1) Create a new game
2) Search for similar games
3) Show all games
4) Save games
5) Load games
6) Add tags
7) Remove tags
8) Set currency
0) Exit
==================================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    CreateGames,
    SearchByTag,
    ShowAll,
    Save,
    Load,
    AddTags,
    RemoveTags,
    SetCurrency,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOption;

impl fmt::Display for InvalidOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ERROR] Invalid option")
    }
}

impl FromStr for MenuOption {
    type Err = InvalidOption;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidOption);
        }

        match input.parse::<u32>().map_err(|_| InvalidOption)? {
            1 => Ok(Self::CreateGames),
            2 => Ok(Self::SearchByTag),
            3 => Ok(Self::ShowAll),
            4 => Ok(Self::Save),
            5 => Ok(Self::Load),
            6 => Ok(Self::AddTags),
            7 => Ok(Self::RemoveTags),
            8 => Ok(Self::SetCurrency),
            0 => Ok(Self::Exit),
            _ => Err(InvalidOption),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_options() {
        assert_eq!("1".parse::<MenuOption>(), Ok(MenuOption::CreateGames));
        assert_eq!(" 8 \n".parse::<MenuOption>(), Ok(MenuOption::SetCurrency));
        assert_eq!("0".parse::<MenuOption>(), Ok(MenuOption::Exit));
        assert_eq!("007".parse::<MenuOption>(), Ok(MenuOption::RemoveTags));
    }

    #[test]
    fn test_invalid_options() {
        for input in ["", "a", "-1", "9", "10", "1.5", "99999999999999999999"] {
            assert_eq!(input.parse::<MenuOption>(), Err(InvalidOption), "{input}");
        }
    }
}
