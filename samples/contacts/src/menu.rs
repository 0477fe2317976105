//! Menu choices.

use std::fmt;
use std::str::FromStr;

use crate::error::ContactsError;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a new contact.
    Add,
    /// Look a contact up by name.
    Find,
    /// List every contact in name order.
    ListAll,
    /// List favorite contacts in name order.
    ListFavorites,
    /// Remove a contact by name.
    Remove,
    /// Leave the program.
    Quit,
}

impl MenuChoice {
    /// All choices, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Find,
        Self::ListAll,
        Self::ListFavorites,
        Self::Remove,
        Self::Quit,
    ];

    /// The number the user types to select this choice.
    pub const fn number(self) -> u8 {
        match self {
            Self::Add => 1,
            Self::Find => 2,
            Self::ListAll => 3,
            Self::ListFavorites => 4,
            Self::Remove => 5,
            Self::Quit => 6,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add contact",
            Self::Find => "Find contact",
            Self::ListAll => "List all",
            Self::ListFavorites => "List favorites",
            Self::Remove => "Remove contact",
            Self::Quit => "Quit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = ContactsError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(|number| Self::ALL.into_iter().find(|choice| choice.number() == number))
            .ok_or_else(|| ContactsError::InvalidChoice(trimmed.to_owned()))
    }
}

/// Interprets a yes/no answer; `y`, `yes` and `s` (sim) mean yes.
pub fn parse_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "s" | "sim"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", MenuChoice::Add)]
    #[case(" 2\n", MenuChoice::Find)]
    #[case("3", MenuChoice::ListAll)]
    #[case("4", MenuChoice::ListFavorites)]
    #[case("5", MenuChoice::Remove)]
    #[case("6", MenuChoice::Quit)]
    fn test_parses_menu_numbers(#[case] input: &str, #[case] expected: MenuChoice) {
        assert_eq!(input.parse::<MenuChoice>().ok(), Some(expected));
    }

    #[rstest]
    #[case("0")]
    #[case("7")]
    #[case("add")]
    #[case("")]
    fn test_rejects_unknown_choices(#[case] input: &str) {
        assert!(matches!(
            input.parse::<MenuChoice>(),
            Err(ContactsError::InvalidChoice(_))
        ));
    }

    #[rstest]
    #[case("y", true)]
    #[case("S", true)]
    #[case("yes", true)]
    #[case("n", false)]
    #[case("", false)]
    fn test_parse_yes(#[case] answer: &str, #[case] expected: bool) {
        assert_eq!(parse_yes(answer), expected);
    }

    #[rstest]
    fn test_display_matches_menu_line() {
        assert_eq!(MenuChoice::ListFavorites.to_string(), "4. List favorites");
    }
}
