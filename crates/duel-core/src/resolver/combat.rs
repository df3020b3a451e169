//! Combat resolver for attacks.
//!
//! Damage is `max(0, attack - defense + variation)` where `variation` is
//! drawn uniformly from [`DAMAGE_VARIATION`]. The result is applied to the
//! defender, whose health clamps at zero.

use std::ops::RangeInclusive;

use rand::Rng;
use tracing::debug;

use crate::entity::Entity;

/// Inclusive range of the luck term added to every attack.
pub const DAMAGE_VARIATION: RangeInclusive<i32> = -3..=3;

/// Draws one luck term from [`DAMAGE_VARIATION`].
pub fn roll_variation<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(DAMAGE_VARIATION)
}

/// Computes damage from raw stats and an already rolled variation.
///
/// The sum is widened to `i64` so extreme stats cannot overflow. Results
/// below zero become zero.
///
/// # Example
///
/// ```
/// use duel_core::resolver::resolve_damage;
///
/// assert_eq!(resolve_damage(20, 8, -3), 9);
/// assert_eq!(resolve_damage(0, 100, 3), 0);
/// ```
#[must_use]
pub fn resolve_damage(attack: i32, defense: i32, variation: i32) -> u32 {
    let raw = i64::from(attack) - i64::from(defense) + i64::from(variation);
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}

/// Resolves one attack: rolls variation, damages the defender, returns the
/// damage dealt.
///
/// # Arguments
///
/// * `attacker` - The entity attacking (read only)
/// * `defender` - The entity taking the hit (health is mutated)
/// * `rng` - Source of the variation roll
///
/// # Example
///
/// ```
/// use duel_core::entity::Entity;
/// use duel_core::resolver::compute_damage;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let knight = Entity::new("Knight", 100, 20, 10);
/// let mut dragon = Entity::new("Dragon", 120, 18, 8);
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
///
/// let damage = compute_damage(&knight, &mut dragon, &mut rng);
/// assert!((9..=15).contains(&damage));
/// assert_eq!(dragon.health(), 120 - damage);
/// ```
pub fn compute_damage<R: Rng + ?Sized>(attacker: &Entity, defender: &mut Entity, rng: &mut R) -> u32 {
    let variation = roll_variation(rng);
    let damage = resolve_damage(attacker.attack(), defender.defense(), variation);
    defender.take_damage(damage);

    debug!(
        attacker = attacker.name(),
        defender = defender.name(),
        variation,
        damage,
        remaining = defender.health(),
        "attack resolved"
    );

    damage
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    mod resolve_damage_tests {
        use super::*;

        #[test]
        fn base_damage_plus_variation() {
            assert_eq!(resolve_damage(20, 8, 0), 12);
            assert_eq!(resolve_damage(20, 8, 3), 15);
            assert_eq!(resolve_damage(20, 8, -3), 9);
        }

        #[test]
        fn negative_result_clamps_to_zero() {
            assert_eq!(resolve_damage(0, 100, 3), 0);
            assert_eq!(resolve_damage(10, 10, -3), 0);
        }

        #[test]
        fn extreme_stats_do_not_overflow() {
            assert_eq!(resolve_damage(i32::MAX, i32::MIN, 3), u32::MAX);
            assert_eq!(resolve_damage(i32::MIN, i32::MAX, -3), 0);
        }
    }

    mod compute_damage_tests {
        use super::*;

        #[test]
        fn damage_is_applied_to_defender() {
            let attacker = Entity::new("Knight", 100, 20, 10);
            let mut defender = Entity::new("Dragon", 120, 18, 8);
            let mut rng = ChaCha8Rng::seed_from_u64(42);

            let damage = compute_damage(&attacker, &mut defender, &mut rng);

            assert!((9..=15).contains(&damage));
            assert_eq!(defender.health(), 120 - damage);
        }

        #[test]
        fn attacker_is_untouched() {
            let attacker = Entity::new("Knight", 100, 20, 10);
            let mut defender = Entity::new("Dragon", 120, 18, 8);
            let mut rng = ChaCha8Rng::seed_from_u64(42);

            compute_damage(&attacker, &mut defender, &mut rng);

            assert_eq!(attacker, Entity::new("Knight", 100, 20, 10));
        }

        #[test]
        fn lethal_hit_clamps_defender_at_zero() {
            let attacker = Entity::new("Knight", 100, 20, 10);
            let mut defender = Entity::new("Dragon", 5, 18, 0);
            let mut rng = ChaCha8Rng::seed_from_u64(42);

            let damage = compute_damage(&attacker, &mut defender, &mut rng);

            assert!((17..=23).contains(&damage));
            assert_eq!(defender.health(), 0);
            assert!(!defender.is_alive());
        }

        #[test]
        fn impenetrable_defense_deals_nothing() {
            let attacker = Entity::new("Dragon", 100, 0, 100);
            let mut defender = Entity::new("Knight", 10, 20, 10);
            let mut rng = ChaCha8Rng::seed_from_u64(42);

            for _ in 0..100 {
                assert_eq!(compute_damage(&attacker, &mut defender, &mut rng), 0);
            }
            assert_eq!(defender.health(), 10);
        }

        #[test]
        fn same_seed_same_damage() {
            let attacker = Entity::new("Knight", 100, 20, 10);
            let mut first = Entity::new("Dragon", 120, 18, 8);
            let mut second = first.clone();
            let mut rng1 = ChaCha8Rng::seed_from_u64(99);
            let mut rng2 = ChaCha8Rng::seed_from_u64(99);

            for _ in 0..5 {
                let a = compute_damage(&attacker, &mut first, &mut rng1);
                let b = compute_damage(&attacker, &mut second, &mut rng2);
                assert_eq!(a, b);
            }
            assert_eq!(first, second);
        }
    }

    #[test]
    fn variation_covers_whole_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = [false; 7];
        for _ in 0..1_000 {
            let v = roll_variation(&mut rng);
            assert!(DAMAGE_VARIATION.contains(&v));
            seen[usize::try_from(v + 3).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s), "every variation should appear: {seen:?}");
    }

    proptest! {
        #[test]
        fn damage_matches_formula(
            attack in -1_000i32..1_000,
            defense in -1_000i32..1_000,
            variation in DAMAGE_VARIATION,
        ) {
            let expected = (attack - defense + variation).max(0);
            prop_assert_eq!(i64::from(resolve_damage(attack, defense, variation)), i64::from(expected));
        }

        #[test]
        fn computed_damage_is_consistent_with_health_loss(
            health in 0u32..500,
            attack in 0i32..50,
            defense in 0i32..50,
            seed in any::<u64>(),
        ) {
            let attacker = Entity::new("A", 100, attack, 0);
            let mut defender = Entity::new("D", health, 0, defense);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let damage = compute_damage(&attacker, &mut defender, &mut rng);

            prop_assert!(damage <= u32::try_from(attack - defense + 3).unwrap_or(0));
            prop_assert_eq!(defender.health(), health.saturating_sub(damage));
        }
    }
}
