//! Action selection for each side of the duel.
//!
//! A [`Controller`] decides what an entity does on its turn. Two
//! implementations cover the duel:
//! - [`InteractiveController`]: asks an [`ActionInput`] (the user) every turn
//! - [`FixedController`]: returns the same action every turn
//!
//! The player is normally interactive; the opponent always attacks.
//!
//! # Example
//!
//! ```
//! use duel_core::controller::{Controller, FixedController, TurnContext};
//! use duel_core::entity::dragon;
//! use duel_core::Action;
//!
//! let opponent = dragon();
//! let ctx = TurnContext {
//!     round: 1,
//!     actor: &opponent,
//! };
//!
//! let mut controller = FixedController::attack();
//! assert_eq!(controller.choose_action(&ctx).unwrap(), Action::Attack);
//! ```

use std::io;

use crate::action::{Action, ActionChoice, PLAYER_CHOICES};
use crate::entity::Entity;
use crate::error::{DuelError, Result};

// =============================================================================
// Turn Context
// =============================================================================

/// What a controller can see when choosing an action.
#[derive(Debug, Clone, Copy)]
pub struct TurnContext<'a> {
    /// Current round, starting at 1.
    pub round: u32,
    /// The entity choosing.
    pub actor: &'a Entity,
}

// =============================================================================
// Controller Trait
// =============================================================================

/// Chooses an entity's action for one turn.
///
/// # Errors
///
/// Implementations that read from the outside world return
/// [`DuelError::Input`] or [`DuelError::InputClosed`] when no choice can be
/// obtained. An unrecognised choice is not an error: it is returned as
/// [`Action::Invalid`].
pub trait Controller {
    /// Returns the action to take this turn.
    ///
    /// # Errors
    ///
    /// See the trait documentation.
    fn choose_action(&mut self, ctx: &TurnContext<'_>) -> Result<Action>;
}

// =============================================================================
// Input Collaborator
// =============================================================================

/// Source of the player's raw choices.
///
/// Implementations present `choices` to the user and return one line of
/// input, or `None` once input is exhausted.
pub trait ActionInput {
    /// Presents the choices and reads one line.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while prompting or reading.
    fn read_choice(&mut self, ctx: &TurnContext<'_>, choices: &[ActionChoice]) -> io::Result<Option<String>>;
}

// =============================================================================
// Implementations
// =============================================================================

/// Controller that delegates every decision to an [`ActionInput`].
#[derive(Debug)]
pub struct InteractiveController<I> {
    input: I,
}

impl<I: ActionInput> InteractiveController<I> {
    /// Wraps an input source.
    #[must_use]
    pub fn new(input: I) -> Self {
        Self { input }
    }

    /// Returns the wrapped input source.
    #[must_use]
    pub fn into_inner(self) -> I {
        self.input
    }
}

impl<I: ActionInput> Controller for InteractiveController<I> {
    fn choose_action(&mut self, ctx: &TurnContext<'_>) -> Result<Action> {
        match self.input.read_choice(ctx, &PLAYER_CHOICES)? {
            Some(line) => Ok(Action::parse(&line)),
            None => Err(DuelError::InputClosed),
        }
    }
}

/// Controller that always returns the same action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedController {
    action: Action,
}

impl FixedController {
    /// Creates a controller that always returns `action`.
    #[must_use]
    pub fn new(action: Action) -> Self {
        Self { action }
    }

    /// Creates a controller that always attacks.
    #[must_use]
    pub fn attack() -> Self {
        Self::new(Action::Attack)
    }
}

impl Controller for FixedController {
    fn choose_action(&mut self, _ctx: &TurnContext<'_>) -> Result<Action> {
        Ok(self.action.clone())
    }
}
