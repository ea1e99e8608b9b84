//! Console output of a contest, gated by verbosity.
//!
//! - `0`: silent
//! - `1`: final score line
//! - `2`: + every round's boxes and each team success
//! - `3`: + every evaluated player

use std::io::{self, Stdout, Write};

use crate::contest::ScoreTally;
use crate::search_strategy::PlayerOutcome;

/// Writes contest traces and the final summary to `W`.
pub struct Reporter<W: Write> {
    out: W,
    verbosity: u8,
}

impl Reporter<Stdout> {
    /// Reporter printing to standard output.
    pub fn stdout(verbosity: u8) -> Self {
        Self::new(io::stdout(), verbosity)
    }
}

impl<W: Write> Reporter<W> {
    /// Reporter writing to `out`.
    pub fn new(out: W, verbosity: u8) -> Self {
        Reporter { out, verbosity }
    }

    /// Configured verbosity level.
    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }

    /// Gives back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Box contents of the current round, e.g. `[3, 1, 0, 2]`.
    pub fn round_boxes(&mut self, boxes: &[usize]) -> io::Result<()> {
        if self.verbosity >= 2 {
            writeln!(self.out, "{boxes:?}")?;
        }
        Ok(())
    }

    /// Team result of one strategy for the current round. Only successes are announced.
    pub fn team_result(&mut self, label: &str, success: bool) -> io::Result<()> {
        if success && self.verbosity >= 2 {
            writeln!(self.out, "{label} team succeeded!")?;
        }
        Ok(())
    }

    /// Per-player trace line.
    pub fn player(&mut self, label: &str, player: usize, outcome: PlayerOutcome) -> io::Result<()> {
        if self.verbosity < 3 {
            return Ok(());
        }
        match outcome {
            PlayerOutcome::Found { attempts_left } => writeln!(
                self.out,
                "{label} player #{player} succeeded, attempts left: {attempts_left}"
            ),
            PlayerOutcome::Failed => writeln!(self.out, "{label} player #{player} failed"),
        }
    }

    /// One-line final score. Flushes the writer.
    pub fn summary(
        &mut self,
        tally: &ScoreTally,
        game_rounds: u64,
        team_size: usize,
    ) -> io::Result<()> {
        if self.verbosity >= 1 {
            writeln!(
                self.out,
                "Final Magic vs. Random vs. Stubborn score is {tally} after {game_rounds} games played with {team_size} players."
            )?;
        }
        self.out.flush()
    }
}
