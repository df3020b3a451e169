//! Heal resolver.
//!
//! Healing adds health without a cap. The amount is rolled from
//! [`HEAL_RANGE`] at the moment the action is taken.

use std::ops::RangeInclusive;

use rand::Rng;
use tracing::debug;

use crate::entity::Entity;

/// Inclusive range of a heal roll.
pub const HEAL_RANGE: RangeInclusive<u32> = 10..=20;

/// Draws one heal amount from [`HEAL_RANGE`].
pub fn roll_heal<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(HEAL_RANGE)
}

/// Adds `amount` to the entity's health, unconditionally.
pub fn heal(entity: &mut Entity, amount: u32) {
    entity.heal(amount);
}

/// Rolls a heal amount, applies it and returns it.
pub fn apply_heal<R: Rng + ?Sized>(entity: &mut Entity, rng: &mut R) -> u32 {
    let amount = roll_heal(rng);
    heal(entity, amount);

    debug!(entity = entity.name(), amount, health = entity.health(), "heal resolved");

    amount
}
