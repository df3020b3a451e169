//! Actions a combatant can take on its turn.
//!
//! The player picks from [`PLAYER_CHOICES`] by typing either the menu
//! selector (`1`, `2`) or the action's name. Anything else parses to
//! [`Action::Invalid`], which forfeits the turn.

use std::fmt;

/// One turn's decision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Attack the other combatant.
    Attack,
    /// Heal self by a rolled amount.
    Heal,
    /// Unrecognised input; the turn is forfeited.
    Invalid(String),
}

impl Action {
    /// Parses a line of player input.
    ///
    /// Surrounding whitespace is ignored and names match case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// use duel_core::Action;
    ///
    /// assert_eq!(Action::parse("1"), Action::Attack);
    /// assert_eq!(Action::parse(" Heal \n"), Action::Heal);
    /// assert_eq!(Action::parse("3"), Action::Invalid("3".to_string()));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        PLAYER_CHOICES
            .iter()
            .find(|choice| choice.matches(trimmed))
            .map_or_else(|| Self::Invalid(trimmed.to_string()), ActionChoice::action)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack => write!(f, "attack"),
            Self::Heal => write!(f, "heal"),
            Self::Invalid(input) => write!(f, "invalid({input:?})"),
        }
    }
}

/// A labelled entry of the player's action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionChoice {
    /// Legacy menu selector typed by the player.
    pub selector: &'static str,
    /// Human-readable label, also accepted as input.
    pub label: &'static str,
    heals: bool,
}

impl ActionChoice {
    /// Returns the action this entry selects.
    #[must_use]
    pub fn action(&self) -> Action {
        if self.heals {
            Action::Heal
        } else {
            Action::Attack
        }
    }

    fn matches(&self, input: &str) -> bool {
        input == self.selector || input.eq_ignore_ascii_case(self.label)
    }
}

/// The two choices offered to the player every turn.
pub const PLAYER_CHOICES: [ActionChoice; 2] = [
    ActionChoice {
        selector: "1",
        label: "Attack",
        heals: false,
    },
    ActionChoice {
        selector: "2",
        label: "Heal",
        heals: true,
    },
];
