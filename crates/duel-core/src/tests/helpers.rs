//! Test helper functions for setting up duels.
//!
//! This module provides a scripted input collaborator and factory functions
//! that make writing duel tests more ergonomic and consistent.

use std::collections::VecDeque;
use std::io;

use crate::action::ActionChoice;
use crate::controller::{ActionInput, FixedController, InteractiveController, TurnContext};
use crate::duel::{Duel, DuelConfig};
use crate::entity::Role;
use crate::event::{DuelEvent, EventLog};

// =============================================================================
// Scripted Input
// =============================================================================

/// Input collaborator that replays a fixed list of lines.
///
/// Returns `None` once the script runs out. Every prompt's round and labels
/// are recorded so tests can check what the player was offered and when.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<(u32, Vec<&'static str>)>,
}

impl ScriptedInput {
    /// Creates an input that will answer with `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Returns the round and labels of each prompt so far.
    pub fn prompts(&self) -> &[(u32, Vec<&'static str>)] {
        &self.prompts
    }
}

impl ActionInput for ScriptedInput {
    fn read_choice(&mut self, ctx: &TurnContext<'_>, choices: &[ActionChoice]) -> io::Result<Option<String>> {
        self.prompts
            .push((ctx.round, choices.iter().map(|choice| choice.label).collect()));
        Ok(self.lines.pop_front())
    }
}

// =============================================================================
// Duel Factories
// =============================================================================

/// Creates a duel whose player answers from `lines`.
pub fn scripted_duel(config: DuelConfig, seed: u64, lines: &[&str]) -> Duel {
    let input = ScriptedInput::new(lines.iter().copied());
    Duel::new(config, seed, Box::new(InteractiveController::new(input)))
}

/// Creates a duel where both sides always attack.
pub fn auto_duel(config: DuelConfig, seed: u64) -> Duel {
    Duel::new(config, seed, Box::new(FixedController::attack()))
}

// =============================================================================
// Event Queries
// =============================================================================

/// Counts the attacks made by `role`.
pub fn attacks_by(log: &EventLog, role: Role) -> usize {
    log.events()
        .iter()
        .filter(|event| matches!(event, DuelEvent::Attacked { role: r, .. } if *r == role))
        .count()
}

/// Returns the damage of every attack made by `role`, in order.
pub fn damage_by(log: &EventLog, role: Role) -> Vec<u32> {
    log.events()
        .iter()
        .filter_map(|event| match event {
            DuelEvent::Attacked { role: r, damage, .. } if *r == role => Some(*damage),
            _ => None,
        })
        .collect()
}

/// Returns the events reported after the `RoundStarted` of `round`, up to
/// the next round.
pub fn round_events(log: &EventLog, round: u32) -> Vec<DuelEvent> {
    log.events()
        .iter()
        .skip_while(|event| !matches!(event, DuelEvent::RoundStarted { round: r, .. } if *r == round))
        .skip(1)
        .take_while(|event| !matches!(event, DuelEvent::RoundStarted { .. }))
        .cloned()
        .collect()
}
