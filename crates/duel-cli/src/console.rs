//! Terminal input and output collaborators.
//!
//! [`ConsoleInput`] prompts the player with the action menu and reads one
//! line per turn. [`ConsoleReporter`] renders duel events as text.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use duel_core::{ActionChoice, ActionInput, DuelEvent, Reporter, Role, TurnContext};

// =============================================================================
// Input
// =============================================================================

/// Reads the player's choices from a line-oriented reader.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Prompts on stdout and reads from stdin.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Creates an input reading from `reader` and prompting on `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> ActionInput for ConsoleInput<R, W> {
    fn read_choice(&mut self, ctx: &TurnContext<'_>, choices: &[ActionChoice]) -> io::Result<Option<String>> {
        writeln!(self.writer, "\n--- Round {}: {}'s Turn ---", ctx.round, ctx.actor.name())?;
        for choice in choices {
            writeln!(self.writer, "{}. {}", choice.selector, choice.label)?;
        }
        write!(self.writer, "Choose your action: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

// =============================================================================
// Output
// =============================================================================

/// Renders one event as the lines shown to the player.
pub fn render(event: &DuelEvent) -> String {
    match event {
        DuelEvent::Started { player, opponent } => format!(
            "=== {opponent} vs {player} ===\nA terrible {} challenges your courage!",
            opponent.to_lowercase()
        ),
        DuelEvent::RoundStarted {
            player,
            player_health,
            opponent,
            opponent_health,
            ..
        } => format!("\n{player} HP: {player_health} | {opponent} HP: {opponent_health}"),
        DuelEvent::Attacked {
            role,
            attacker,
            defender,
            damage,
            ..
        } => {
            let line = format!("{attacker} attacks and deals {damage} damage to {defender}.");
            match role {
                Role::Player => line,
                Role::Opponent => format!("\n--- {attacker}'s Turn ---\n{line}"),
            }
        }
        DuelEvent::Healed { entity, amount, .. } => format!("{entity} heals for {amount} HP."),
        DuelEvent::InvalidAction { .. } => "Invalid action! You lose your turn.".to_string(),
        DuelEvent::Defeated { role, loser, .. } => match role {
            Role::Opponent => format!("\n{loser} is defeated. You win!"),
            Role::Player => format!("\n{loser} has fallen. Game over."),
        },
        DuelEvent::RoundLimitReached { rounds } => {
            format!("\nNeither side prevails after {rounds} rounds. The battle is a draw.")
        }
        DuelEvent::Finished { .. } => "\n=== End of the battle ===".to_string(),
    }
}

/// Reporter writing rendered events to a writer.
///
/// The first write error is kept and returned by [`ConsoleReporter::finish`];
/// later events are dropped.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a reporter writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, error: None }
    }

    /// Flushes the writer and returns the first write error, if any.
    pub fn finish(mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: &DuelEvent) {
        if self.error.is_some() {
            return;
        }
        let written = writeln!(self.writer, "{}", render(event)).and_then(|()| {
            if event.is_final() {
                self.writer.flush()
            } else {
                Ok(())
            }
        });
        if let Err(err) = written {
            tracing::warn!(error = %err, "failed to write battle output");
            self.error = Some(err);
        }
    }
}
