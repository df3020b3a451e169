//! Entity module for the duel simulation.
//!
//! This module provides the combatant types:
//! - [`Entity`]: A combatant with a name, health, attack and defense
//! - [`Role`]: Which side of the duel an entity fights on
//! - [`roster`]: The fixed starting combatants
//!
//! # Health Invariant
//!
//! Health is stored as a `u32`, so it can never go negative. Damage clamps at
//! zero and an entity with zero health is dead. Healing is uncapped: an
//! entity may end up above its starting health.
//!
//! # Example
//!
//! ```
//! use duel_core::entity::Entity;
//!
//! let mut knight = Entity::new("Knight", 100, 20, 10);
//! knight.take_damage(130);
//!
//! assert_eq!(knight.health(), 0);
//! assert!(!knight.is_alive());
//! ```

pub mod roster;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use roster::{dragon, knight};

/// Which side of the duel an entity fights on.
///
/// Roles are fixed for the whole duel. The player's actions come from the
/// user, the opponent's from a fixed rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The user-controlled combatant.
    Player,
    /// The computer-controlled combatant.
    Opponent,
}

impl Role {
    /// Returns the other side of the duel.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Opponent => write!(f, "opponent"),
        }
    }
}

/// A combatant.
///
/// Attack and defense are fixed once the entity is created. Health changes
/// only through [`Entity::take_damage`] and [`Entity::heal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    name: String,
    health: u32,
    attack: i32,
    defense: i32,
}

impl Entity {
    /// Creates a new entity.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name used in reports
    /// * `health` - Starting health
    /// * `attack` - Attack rating, fixed for the duel
    /// * `defense` - Defense rating, fixed for the duel
    #[must_use]
    pub fn new(name: impl Into<String>, health: u32, attack: i32, defense: i32) -> Self {
        Self {
            name: name.into(),
            health,
            attack,
            defense,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current health.
    #[must_use]
    pub const fn health(&self) -> u32 {
        self.health
    }

    /// Returns the attack rating.
    #[must_use]
    pub const fn attack(&self) -> i32 {
        self.attack
    }

    /// Returns the defense rating.
    #[must_use]
    pub const fn defense(&self) -> i32 {
        self.defense
    }

    /// Returns true while the entity has health left.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Reduces health by `amount`, clamping at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Increases health by `amount`.
    ///
    /// There is no upper cap tied to starting health. The sum saturates at
    /// `u32::MAX` rather than wrapping.
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount);
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} HP: {}", self.name, self.health)
    }
}
