//! Resolver module for damage and healing.
//!
//! Resolvers turn a chosen action into a state mutation. They take the
//! entities by reference for the duration of the call only and draw any
//! randomness from the generator they are handed, never from global state.
//!
//! # Available Resolvers
//!
//! - [`compute_damage`]: Rolls variation, applies damage to the defender
//! - [`resolve_damage`]: The damage formula without randomness
//! - [`apply_heal`]: Rolls a heal amount and applies it
//!
//! # Invariants
//!
//! - Damage is never negative and defender health never drops below zero
//! - Healing is never capped by starting health

mod combat;
mod heal;

pub use combat::{compute_damage, resolve_damage, roll_variation, DAMAGE_VARIATION};
pub use heal::{apply_heal, heal, roll_heal, HEAL_RANGE};
