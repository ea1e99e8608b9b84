//! Monte Carlo driver running the three strategies side by side.
//!
//! Every round reshuffles one box buffer and lets the Magic, Random and Stubborn teams play
//! against that very same permutation, so the comparison is fair. Success counts are accumulated
//! in a [`ScoreTally`]. After the last round the summary is reported and the buffer goes through
//! a final integrity check.
//!
//! # Example
//!
//! ```
//! use prisoners_contest::prelude::*;
//!
//! let settings = ContestSettingsBuilder::new()
//!     .with_team_size(10)
//!     .with_game_rounds(100)
//!     .with_verbosity(0)
//!     .build()?;
//!
//! let mut rng = Entropy::seeded(42);
//! let tally = ContestDriver::new(&mut rng).run(&settings, &mut Reporter::stdout(0))?;
//! assert!(tally.magic <= 100);
//! # anyhow::Ok(())
//! ```

use std::{fmt, io::Write};

use anyhow::Context;
use rand::Rng;
use tracing::{debug, error, info, instrument, trace};

use crate::integrity::validate;
use crate::permutation::{fill_identity, longest_cycle, shuffle};
use crate::report::Reporter;
use crate::search_strategy::{
    AttemptBudget, CycleFollowing, FixedSequential, RandomizedSequential, SearchStrategy,
};
use crate::settings::ContestSettings;

/// Number of rounds won by each team.
#[derive(PartialEq, Eq, Default, Debug, Clone, Copy)]
pub struct ScoreTally {
    /// Rounds won by cycle following.
    pub magic: u64,
    /// Rounds won by randomized sequential search.
    pub random: u64,
    /// Rounds won by fixed sequential search.
    pub stubborn: u64,
}

impl fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} : {} : {}]", self.magic, self.random, self.stubborn)
    }
}

/// Runs contests with one borrowed entropy source.
///
/// The source is used for every draw of every contest run through this driver and is never
/// recreated, so successive rounds stay statistically independent.
pub struct ContestDriver<'r, R: Rng + ?Sized> {
    rng: &'r mut R,
}

impl<'r, R: Rng + ?Sized> ContestDriver<'r, R> {
    /// Borrows `rng` for the lifetime of the driver.
    pub fn new(rng: &'r mut R) -> Self {
        ContestDriver { rng }
    }

    /// Plays `settings.game_rounds()` rounds with `settings.team_size()` players.
    ///
    /// # Errors
    /// Returned when writing to the reporter fails, or when the box buffer is found corrupted
    /// after the last round (the root cause is then a
    /// [`DataCorruption`](crate::integrity::DataCorruption)).
    #[instrument(skip_all, fields(team_size = settings.team_size(), game_rounds = settings.game_rounds()))]
    pub fn run<W: Write>(
        &mut self,
        settings: &ContestSettings,
        reporter: &mut Reporter<W>,
    ) -> anyhow::Result<ScoreTally> {
        let budget = settings.attempt_budget();
        info!(
            attempts = budget.get(),
            entropy = %settings.entropy(),
            verbosity = reporter.verbosity(),
            "contest started"
        );

        let mut tally = ScoreTally::default();
        let mut boxes = vec![0; settings.team_size()];
        fill_identity(&mut boxes);

        for round in 0..settings.game_rounds() {
            // reshuffling the previous round's permutation is as uniform as shuffling the identity
            shuffle(&mut boxes, &mut *self.rng);
            debug!(round, longest_cycle = longest_cycle(&boxes), "boxes shuffled");
            reporter.round_boxes(&boxes)?;

            if self.play(&CycleFollowing, &boxes, budget, reporter)? {
                tally.magic += 1;
            }
            if self.play(&RandomizedSequential, &boxes, budget, reporter)? {
                tally.random += 1;
            }
            if self.play(&FixedSequential, &boxes, budget, reporter)? {
                tally.stubborn += 1;
            }
        }

        info!(%tally, "contest finished");
        reporter.summary(&tally, settings.game_rounds(), settings.team_size())?;

        final_check(&boxes)?;
        Ok(tally)
    }

    fn play<S: SearchStrategy, W: Write>(
        &mut self,
        strategy: &S,
        boxes: &[usize],
        budget: AttemptBudget,
        reporter: &mut Reporter<W>,
    ) -> anyhow::Result<bool> {
        let label = strategy.label();
        let success = strategy.play_team(boxes, budget, &mut *self.rng, |player, outcome| {
            trace!(strategy = label, player, ?outcome);
            reporter.player(label, player, outcome)
        })?;
        reporter.team_result(label, success)?;
        Ok(success)
    }
}

/// Fails the run if the box buffer is no longer a permutation.
fn final_check(boxes: &[usize]) -> anyhow::Result<()> {
    if let Err(corruption) = validate(boxes) {
        error!(%corruption, "box buffer failed the final integrity check");
        return Err(corruption).context("final integrity check");
    }
    Ok(())
}
