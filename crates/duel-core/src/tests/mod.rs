//! Test module for determinism and integration tests.
//!
//! This module provides tests for the whole turn loop:
//! - **Determinism tests**: Verify same seed and inputs produce identical duels
//! - **Integration tests**: Play complete duels through the public API
//! - **Helper functions**: Scripted input and duel factories
//!
//! # Test Structure
//!
//! - `determinism.rs`: Tests that verify reproducible execution
//! - `integration.rs`: End-to-end duel scenarios
//! - `helpers.rs`: Test setup utilities and factory functions

mod helpers;

// Re-export for convenience
pub use helpers::*;
