//! Terminal duel entry point.
//!
//! Assembles a [`Duel`] from command-line flags, plays it on stdin/stdout
//! and logs to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Interactive, random seed
//! cargo run -p duel-cli
//!
//! # Reproducible automated duel with a JSON report
//! cargo run -p duel-cli -- --seed 42 --auto --json
//!
//! # Debug logging of every roll
//! RUST_LOG=duel_core=debug cargo run -p duel-cli
//! ```

mod console;
mod logging;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use duel_core::{Controller, Duel, DuelConfig, FixedController, InteractiveController, DEFAULT_MAX_ROUNDS};

use console::{ConsoleInput, ConsoleReporter};

#[derive(Debug, Parser)]
#[command(name = "duel")]
#[command(about = "Knight against Dragon, one turn at a time")]
struct Cli {
    /// RNG seed for a reproducible duel (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Rounds before the duel is declared a draw (0 disables the cap)
    #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: u32,
    /// The Knight attacks every turn without asking
    #[arg(long)]
    auto: bool,
    /// Print a JSON report after the battle
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> DuelConfig {
        DuelConfig::default().with_max_rounds((self.max_rounds > 0).then_some(self.max_rounds))
    }
}

fn main() -> Result<()> {
    logging::setup_logging();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);

    let controller: Box<dyn Controller> = if cli.auto {
        Box::new(FixedController::attack())
    } else {
        Box::new(InteractiveController::new(ConsoleInput::stdin()))
    };

    let mut duel = Duel::new(cli.config(), seed, controller);
    tracing::info!(seed = duel.seed(), max_rounds = ?duel.max_rounds(), auto = cli.auto, "starting duel");

    let mut reporter = ConsoleReporter::new(io::stdout());

    let outcome = duel.run(&mut reporter).context("duel aborted")?;
    reporter.finish().context("failed to write battle output")?;

    tracing::info!(%outcome, rounds = duel.round(), "duel complete");

    if cli.json {
        println!("{}", report_json(&duel)?);
    }

    Ok(())
}

/// Encodes the duel's report as pretty-printed JSON.
fn report_json(duel: &Duel) -> Result<String> {
    serde_json::to_string_pretty(&duel.report()).context("failed to encode report")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["duel"]);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.max_rounds, DEFAULT_MAX_ROUNDS);
        assert!(!cli.auto);
        assert!(!cli.json);
        assert_eq!(cli.config(), DuelConfig::default());
    }

    #[test]
    fn zero_max_rounds_disables_cap() {
        let cli = Cli::parse_from(["duel", "--max-rounds", "0"]);
        assert_eq!(cli.config().max_rounds, None);
    }

    #[test]
    fn all_flags() {
        let cli = Cli::parse_from(["duel", "--seed", "9", "--max-rounds", "20", "--auto", "--json"]);
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.config().max_rounds, Some(20));
        assert!(cli.auto);
        assert!(cli.json);
    }

    #[test]
    fn json_report_of_auto_duel() {
        let cli = Cli::parse_from(["duel", "--seed", "42", "--auto", "--json"]);
        let mut duel = Duel::new(cli.config(), 42, Box::new(FixedController::attack()));
        let outcome = duel.run(&mut duel_core::EventLog::new()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&report_json(&duel).unwrap()).unwrap();

        assert_eq!(json["seed"], 42);
        assert_eq!(json["rounds"], duel.round());
        assert_eq!(json["outcome"], serde_json::to_value(outcome).unwrap());
        assert_ne!(json["outcome"], "draw");
        assert_eq!(json["player"]["name"], "Knight");
        assert_eq!(json["opponent"]["name"], "Dragon");
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
