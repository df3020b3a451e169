//! Error types surfaced by the duel loop.
//!
//! An unrecognised player choice is not an error: it is a forfeited turn.
//! Errors here are faults of the input collaborator or misuse of a finished
//! duel, and callers are expected to stop the program on them.

use std::io;

use thiserror::Error;

use crate::duel::Outcome;

/// Result alias for duel operations.
pub type Result<T> = std::result::Result<T, DuelError>;

/// Failures that stop a duel from advancing.
#[derive(Debug, Error)]
pub enum DuelError {
    /// The input collaborator failed while reading the player's choice.
    #[error("failed to read player input")]
    Input(#[from] io::Error),

    /// The input collaborator ran out of input before the duel finished.
    #[error("player input closed before the duel finished")]
    InputClosed,

    /// `step` was called on a duel that already reached a terminal state.
    #[error("duel already finished: {0}")]
    Finished(Outcome),
}
