//! Duel module with the turn loop state machine.
//!
//! The [`Duel`] owns both entities, both controllers and the random source.
//! It advances one turn per [`Duel::step`]:
//!
//! 1. **`PlayerTurn`**: report the round's health summary, ask the player's
//!    controller for an action, apply it. If the opponent is dead the duel
//!    ends in `PlayerWon` and the opponent does not act this round.
//! 2. **`OpponentTurn`**: ask the opponent's controller (normally a fixed
//!    attack), apply it. If the player is dead the duel ends in
//!    `OpponentWon`, otherwise the next round begins.
//!
//! # Round Cap
//!
//! Two combatants that cannot hurt each other would trade blows forever.
//! When [`DuelConfig::max_rounds`] is set and that many rounds have been
//! played with both sides alive, the duel ends in [`Outcome::Draw`]. An
//! uncapped duel still ends in a draw once the round counter reaches
//! `u32::MAX`.
//!
//! # Input Failures
//!
//! If the player's controller fails, the step returns the error and the
//! round stays open. The next step asks the player again for the same round
//! without reporting a second `RoundStarted`.
//!
//! # Determinism
//!
//! All rolls come from a `ChaCha8Rng` seeded at construction, so the same
//! seed and the same player inputs reproduce the same duel.
//!
//! # Example
//!
//! ```
//! use duel_core::duel::{Duel, DuelConfig, DuelState};
//! use duel_core::event::EventLog;
//! use duel_core::FixedController;
//!
//! let mut duel = Duel::new(DuelConfig::default(), 7, Box::new(FixedController::attack()));
//! let mut log = EventLog::new();
//!
//! assert_eq!(duel.step(&mut log).unwrap(), DuelState::OpponentTurn);
//! assert_eq!(duel.step(&mut log).unwrap(), DuelState::PlayerTurn);
//! assert_eq!(duel.round(), 1);
//! ```

use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::action::Action;
use crate::controller::{Controller, FixedController, TurnContext};
use crate::entity::{dragon, knight, Entity, Role};
use crate::error::{DuelError, Result};
use crate::event::{DuelEvent, Reporter};
use crate::resolver::{apply_heal, compute_damage};

/// Round cap used by [`DuelConfig::default`].
pub const DEFAULT_MAX_ROUNDS: u32 = 500;

// =============================================================================
// Configuration
// =============================================================================

/// Starting line-up and limits for a duel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelConfig {
    /// The user-controlled combatant.
    pub player: Entity,
    /// The computer-controlled combatant.
    pub opponent: Entity,
    /// Rounds after which a duel with both sides alive is a draw.
    /// `None` lets the duel run until someone falls.
    pub max_rounds: Option<u32>,
}

impl Default for DuelConfig {
    /// Knight against Dragon with the default round cap.
    fn default() -> Self {
        Self {
            player: knight(),
            opponent: dragon(),
            max_rounds: Some(DEFAULT_MAX_ROUNDS),
        }
    }
}

impl DuelConfig {
    /// Creates a configuration for two custom combatants with the default cap.
    #[must_use]
    pub fn new(player: Entity, opponent: Entity) -> Self {
        Self {
            player,
            opponent,
            ..Self::default()
        }
    }

    /// Replaces the round cap.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: Option<u32>) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

// =============================================================================
// State and Outcome
// =============================================================================

/// How a duel ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The opponent fell.
    PlayerWon,
    /// The player fell.
    OpponentWon,
    /// The round cap was reached with both sides alive.
    Draw,
}

impl Outcome {
    /// Returns the winning side, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Role> {
        match self {
            Self::PlayerWon => Some(Role::Player),
            Self::OpponentWon => Some(Role::Opponent),
            Self::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerWon => write!(f, "player won"),
            Self::OpponentWon => write!(f, "opponent won"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

/// Position of the turn loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DuelState {
    /// Waiting for the player's action.
    PlayerTurn,
    /// Waiting for the opponent's action.
    OpponentTurn,
    /// Terminal: the opponent fell.
    PlayerWon,
    /// Terminal: the player fell.
    OpponentWon,
    /// Terminal: round cap reached.
    Draw,
}

impl DuelState {
    /// Returns true once the duel can no longer advance.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.outcome().is_some()
    }

    /// Returns the outcome for terminal states.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::PlayerTurn | Self::OpponentTurn => None,
            Self::PlayerWon => Some(Outcome::PlayerWon),
            Self::OpponentWon => Some(Outcome::OpponentWon),
            Self::Draw => Some(Outcome::Draw),
        }
    }
}

impl From<Outcome> for DuelState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::PlayerWon => Self::PlayerWon,
            Outcome::OpponentWon => Self::OpponentWon,
            Outcome::Draw => Self::Draw,
        }
    }
}

/// Summary of a duel, suitable for serialising.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelReport {
    /// Seed of the duel's random source.
    pub seed: u64,
    /// Rounds started so far.
    pub rounds: u32,
    /// Outcome, once the duel is over.
    pub outcome: Option<Outcome>,
    /// Player as it stands now.
    pub player: Entity,
    /// Opponent as it stands now.
    pub opponent: Entity,
}

// =============================================================================
// Duel
// =============================================================================

/// One battle between a player and an opponent.
///
/// `Duel` owns:
/// - Both entities (mutated only by the turn loop)
/// - A controller per side
/// - The seeded random source for damage and heal rolls
/// - The round counter and current [`DuelState`]
pub struct Duel {
    player: Entity,
    opponent: Entity,
    player_controller: Box<dyn Controller>,
    opponent_controller: Box<dyn Controller>,
    rng: ChaCha8Rng,
    seed: u64,
    round: u32,
    max_rounds: Option<u32>,
    round_in_progress: bool,
    state: DuelState,
}

impl fmt::Debug for Duel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Duel")
            .field("player", &self.player)
            .field("opponent", &self.opponent)
            .field("seed", &self.seed)
            .field("round", &self.round)
            .field("max_rounds", &self.max_rounds)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Duel {
    /// Creates a duel where the opponent always attacks.
    ///
    /// # Arguments
    ///
    /// * `config` - Starting combatants and round cap
    /// * `seed` - Seed for the random source
    /// * `player_controller` - Decides the player's actions
    #[must_use]
    pub fn new(config: DuelConfig, seed: u64, player_controller: Box<dyn Controller>) -> Self {
        Self::with_controllers(
            config,
            seed,
            player_controller,
            Box::new(FixedController::attack()),
        )
    }

    /// Creates a duel with explicit controllers for both sides.
    #[must_use]
    pub fn with_controllers(
        config: DuelConfig,
        seed: u64,
        player_controller: Box<dyn Controller>,
        opponent_controller: Box<dyn Controller>,
    ) -> Self {
        Self {
            player: config.player,
            opponent: config.opponent,
            player_controller,
            opponent_controller,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            round: 0,
            max_rounds: config.max_rounds,
            round_in_progress: false,
            state: DuelState::PlayerTurn,
        }
    }

    /// Returns the seed of the random source.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of rounds started so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Returns the round cap.
    #[must_use]
    pub fn max_rounds(&self) -> Option<u32> {
        self.max_rounds
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> DuelState {
        self.state
    }

    /// Returns the outcome once the duel is over.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Returns true once the duel reached a terminal state.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns the player entity.
    #[must_use]
    pub fn player(&self) -> &Entity {
        &self.player
    }

    /// Returns the opponent entity.
    #[must_use]
    pub fn opponent(&self) -> &Entity {
        &self.opponent
    }

    /// Returns the entity fighting on `role`'s side.
    #[must_use]
    pub fn entity(&self, role: Role) -> &Entity {
        match role {
            Role::Player => &self.player,
            Role::Opponent => &self.opponent,
        }
    }

    /// Builds a serialisable summary of the duel so far.
    #[must_use]
    pub fn report(&self) -> DuelReport {
        DuelReport {
            seed: self.seed,
            rounds: self.round,
            outcome: self.outcome(),
            player: self.player.clone(),
            opponent: self.opponent.clone(),
        }
    }

    /// Advances the duel by one turn and returns the new state.
    ///
    /// # Errors
    ///
    /// - [`DuelError::Finished`] if the duel is already over
    /// - Any error raised by the acting side's controller
    pub fn step(&mut self, reporter: &mut dyn Reporter) -> Result<DuelState> {
        match self.state {
            DuelState::PlayerTurn => self.player_turn(reporter)?,
            DuelState::OpponentTurn => self.opponent_turn(reporter)?,
            DuelState::PlayerWon => return Err(DuelError::Finished(Outcome::PlayerWon)),
            DuelState::OpponentWon => return Err(DuelError::Finished(Outcome::OpponentWon)),
            DuelState::Draw => return Err(DuelError::Finished(Outcome::Draw)),
        }
        Ok(self.state)
    }

    /// Steps until the duel is over and returns the outcome.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Duel::step`].
    pub fn run(&mut self, reporter: &mut dyn Reporter) -> Result<Outcome> {
        loop {
            if let Some(outcome) = self.step(reporter)?.outcome() {
                return Ok(outcome);
            }
        }
    }

    fn player_turn(&mut self, reporter: &mut dyn Reporter) -> Result<()> {
        if !self.round_in_progress {
            if let Some(outcome) = self.start_round(reporter) {
                self.finish(outcome, reporter);
                return Ok(());
            }
        }

        self.take_turn(Role::Player, reporter)?;
        self.round_in_progress = false;

        if self.opponent.is_alive() {
            self.state = DuelState::OpponentTurn;
        } else {
            self.finish(Outcome::PlayerWon, reporter);
        }
        Ok(())
    }

    /// Opens the next round, or returns the outcome if no round can be played.
    fn start_round(&mut self, reporter: &mut dyn Reporter) -> Option<Outcome> {
        if self.round == 0 {
            info!(
                seed = self.seed,
                player = self.player.name(),
                opponent = self.opponent.name(),
                "duel started"
            );
            reporter.report(&DuelEvent::Started {
                player: self.player.name().to_string(),
                opponent: self.opponent.name().to_string(),
            });
        }

        // Only reachable when a configuration starts someone at zero health.
        if !self.opponent.is_alive() {
            return Some(Outcome::PlayerWon);
        }
        if !self.player.is_alive() {
            return Some(Outcome::OpponentWon);
        }

        if self.round >= self.max_rounds.unwrap_or(u32::MAX) {
            return Some(Outcome::Draw);
        }

        self.round += 1;
        self.round_in_progress = true;
        reporter.report(&DuelEvent::RoundStarted {
            round: self.round,
            player: self.player.name().to_string(),
            player_health: self.player.health(),
            opponent: self.opponent.name().to_string(),
            opponent_health: self.opponent.health(),
        });
        None
    }

    fn opponent_turn(&mut self, reporter: &mut dyn Reporter) -> Result<()> {
        self.take_turn(Role::Opponent, reporter)?;

        if self.player.is_alive() {
            self.state = DuelState::PlayerTurn;
        } else {
            self.finish(Outcome::OpponentWon, reporter);
        }
        Ok(())
    }

    /// Asks `role`'s controller for an action and applies it.
    fn take_turn(&mut self, role: Role, reporter: &mut dyn Reporter) -> Result<()> {
        let (actor, target, controller) = match role {
            Role::Player => (&mut self.player, &mut self.opponent, &mut self.player_controller),
            Role::Opponent => (&mut self.opponent, &mut self.player, &mut self.opponent_controller),
        };

        let action = controller.choose_action(&TurnContext {
            round: self.round,
            actor,
        })?;

        let event = match action {
            Action::Attack => {
                let damage = compute_damage(actor, target, &mut self.rng);
                DuelEvent::Attacked {
                    role,
                    attacker: actor.name().to_string(),
                    defender: target.name().to_string(),
                    damage,
                    remaining: target.health(),
                }
            }
            Action::Heal => {
                let amount = apply_heal(actor, &mut self.rng);
                DuelEvent::Healed {
                    role,
                    entity: actor.name().to_string(),
                    amount,
                    health: actor.health(),
                }
            }
            Action::Invalid(input) => {
                debug!(%role, input = %input, "unrecognised action, turn forfeited");
                DuelEvent::InvalidAction {
                    role,
                    entity: actor.name().to_string(),
                    input,
                }
            }
        };

        reporter.report(&event);
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome, reporter: &mut dyn Reporter) {
        self.state = outcome.into();

        let closing = match outcome.winner() {
            Some(winner) => {
                let loser = winner.other();
                DuelEvent::Defeated {
                    role: loser,
                    loser: self.entity(loser).name().to_string(),
                    winner: self.entity(winner).name().to_string(),
                }
            }
            None => DuelEvent::RoundLimitReached { rounds: self.round },
        };
        reporter.report(&closing);
        reporter.report(&DuelEvent::Finished {
            outcome,
            rounds: self.round,
        });

        info!(
            %outcome,
            rounds = self.round,
            player_health = self.player.health(),
            opponent_health = self.opponent.health(),
            "duel finished"
        );
    }
}
