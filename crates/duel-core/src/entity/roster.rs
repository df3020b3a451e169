//! Starting combatants.
//!
//! The duel always opens with the same two fighters. Their stats are
//! constants rather than configuration.

use super::Entity;

/// Player starting health.
pub const KNIGHT_HEALTH: u32 = 100;
/// Player attack rating.
pub const KNIGHT_ATTACK: i32 = 20;
/// Player defense rating.
pub const KNIGHT_DEFENSE: i32 = 10;

/// Opponent starting health.
pub const DRAGON_HEALTH: u32 = 120;
/// Opponent attack rating.
pub const DRAGON_ATTACK: i32 = 18;
/// Opponent defense rating.
pub const DRAGON_DEFENSE: i32 = 8;

/// The player-controlled Knight.
#[must_use]
pub fn knight() -> Entity {
    Entity::new("Knight", KNIGHT_HEALTH, KNIGHT_ATTACK, KNIGHT_DEFENSE)
}

/// The computer-controlled Dragon.
#[must_use]
pub fn dragon() -> Entity {
    Entity::new("Dragon", DRAGON_HEALTH, DRAGON_ATTACK, DRAGON_DEFENSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_stats() {
        let knight = knight();
        assert_eq!(knight.name(), "Knight");
        assert_eq!(knight.health(), 100);
        assert_eq!(knight.attack(), 20);
        assert_eq!(knight.defense(), 10);
    }

    #[test]
    fn dragon_stats() {
        let dragon = dragon();
        assert_eq!(dragon.name(), "Dragon");
        assert_eq!(dragon.health(), 120);
        assert_eq!(dragon.attack(), 18);
        assert_eq!(dragon.defense(), 8);
    }
}
