//! Events reported while a duel runs.
//!
//! The duel never prints. Everything observable is emitted as a
//! [`DuelEvent`] to a [`Reporter`], which decides how to present it. The
//! terminal front end renders events as text; tests record them in an
//! [`EventLog`].
//!
//! # Event Order
//!
//! A complete duel reports:
//! 1. `Started`
//! 2. For each round: `RoundStarted`, then the player's action event, then
//!    the opponent's action event unless the player's action ended the duel
//! 3. `Defeated` (or `RoundLimitReached` for a draw)
//! 4. `Finished`

use serde::{Deserialize, Serialize};

use crate::duel::Outcome;
use crate::entity::Role;

/// Something that happened during a duel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DuelEvent {
    /// The duel opened.
    Started {
        /// Player's name
        player: String,
        /// Opponent's name
        opponent: String,
    },
    /// A round began; health of both sides before the player acts.
    RoundStarted {
        /// Round number, starting at 1
        round: u32,
        /// Player's name
        player: String,
        /// Player's health
        player_health: u32,
        /// Opponent's name
        opponent: String,
        /// Opponent's health
        opponent_health: u32,
    },
    /// An entity attacked.
    Attacked {
        /// Side of the attacker
        role: Role,
        /// Attacker's name
        attacker: String,
        /// Defender's name
        defender: String,
        /// Damage dealt
        damage: u32,
        /// Defender's health after the hit
        remaining: u32,
    },
    /// An entity healed itself.
    Healed {
        /// Side of the entity
        role: Role,
        /// Entity's name
        entity: String,
        /// Health restored
        amount: u32,
        /// Health after healing
        health: u32,
    },
    /// An entity's choice was not recognised; its turn is lost.
    InvalidAction {
        /// Side of the entity
        role: Role,
        /// Entity's name
        entity: String,
        /// The rejected input
        input: String,
    },
    /// An entity reached zero health.
    Defeated {
        /// Side of the defeated entity
        role: Role,
        /// Defeated entity's name
        loser: String,
        /// Surviving entity's name
        winner: String,
    },
    /// The round cap was reached with both sides alive.
    RoundLimitReached {
        /// Rounds played
        rounds: u32,
    },
    /// The duel ended.
    Finished {
        /// Final outcome
        outcome: Outcome,
        /// Rounds played
        rounds: u32,
    },
}

impl DuelEvent {
    /// Returns true for the events that end a duel's report.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }
}

/// Output collaborator receiving every event of a duel.
pub trait Reporter {
    /// Handles one event.
    fn report(&mut self, event: &DuelEvent);
}

/// Reporter that records events in memory.
///
/// # Example
///
/// ```
/// use duel_core::event::{DuelEvent, EventLog, Reporter};
///
/// let mut log = EventLog::new();
/// log.report(&DuelEvent::RoundLimitReached { rounds: 3 });
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.events()[0], DuelEvent::RoundLimitReached { rounds: 3 });
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<DuelEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in order.
    #[must_use]
    pub fn events(&self) -> &[DuelEvent] {
        &self.events
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Reporter for EventLog {
    fn report(&mut self, event: &DuelEvent) {
        self.events.push(event.clone());
    }
}
