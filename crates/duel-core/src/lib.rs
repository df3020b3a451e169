//! # Duel Core
//!
//! Turn-based duel simulation between a player-controlled combatant and a
//! computer-controlled opponent.
//!
//! ## Architecture
//!
//! - **Entities**: Combatants with health, attack and defense ([`entity`])
//! - **Controllers**: Decide each turn's [`Action`] ([`controller`])
//! - **Resolvers**: Damage and healing rules ([`resolver`])
//! - **Duel**: The turn loop state machine ([`duel`])
//! - **Events**: What happened, reported to a [`Reporter`] ([`event`])
//!
//! Randomness is injected as a seeded `ChaCha8Rng`, so a duel replayed with
//! the same seed and the same player inputs produces the same event log.
//!
//! ## Usage
//!
//! ```
//! use duel_core::{Duel, DuelConfig, EventLog, FixedController, Outcome};
//!
//! let mut duel = Duel::new(DuelConfig::default(), 42, Box::new(FixedController::attack()));
//! let mut log = EventLog::new();
//!
//! let outcome = duel.run(&mut log).unwrap();
//! assert_ne!(outcome, Outcome::Draw);
//! assert!(!log.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod controller;
pub mod duel;
pub mod entity;
pub mod error;
pub mod event;
pub mod resolver;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use action::{Action, ActionChoice, PLAYER_CHOICES};
pub use controller::{ActionInput, Controller, FixedController, InteractiveController, TurnContext};
pub use duel::{Duel, DuelConfig, DuelReport, DuelState, Outcome, DEFAULT_MAX_ROUNDS};
pub use entity::{Entity, Role};
pub use error::{DuelError, Result};
pub use event::{DuelEvent, EventLog, Reporter};
