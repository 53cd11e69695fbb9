//! A player driven by a human operator over a line-based reader and writer.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use tracing::debug;

use crate::core::{Action, ArenaError, GameState};
use crate::rules::RulesEngine;

use super::Player;

/// Asks an operator for each move.
///
/// Shows the legal action codes and the numbered board on `output`, then
/// reads one line from `input`. Anything that is not an integer is rejected
/// and the operator is asked again. The number itself is passed through
/// as-is: an illegal code forfeits the match like any other illegal move.
pub struct InteractivePlayer<R, W> {
    input: R,
    output: W,
}

impl InteractivePlayer<StdinLock<'static>, Stdout> {
    /// Operator on the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InteractivePlayer<R, W> {
    /// Operator on an arbitrary reader/writer pair.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Player for InteractivePlayer<R, W> {
    fn name(&self) -> String {
        "Human".to_string()
    }

    fn choose_move(
        &mut self,
        engine: &dyn RulesEngine,
        state: &GameState,
    ) -> Result<Action, ArenaError> {
        let codes: Vec<String> = engine.actions(state).iter().map(Action::to_string).collect();
        writeln!(self.output, "Choose one of the following positions: [{}]", codes.join(", "))?;
        write!(self.output, "{}", engine.render_state(state, true))?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                let closed = io::Error::new(io::ErrorKind::UnexpectedEof, "operator input closed");
                return Err(closed.into());
            }

            let answer = line.trim();
            match answer.parse::<u16>() {
                Ok(code) => return Ok(Action::new(code)),
                Err(_) => {
                    debug!(input = answer, "rejected non-numeric move");
                    writeln!(self.output, "'{answer}' is not a position number, try again")?;
                }
            }
        }
    }
}
