//! Box-opening strategies compared by the contest.
//!
//! This module defines the [`SearchStrategy`] trait and the three built-in strategies. Every
//! player `i` is looking for the value `i`, may open at most [`AttemptBudget`] boxes, and the team
//! wins a round only if every player finds their number.
//!
//! # Provided Strategies
//! - [`CycleFollowing`] ("Magic"): open your own box, then the box named by the value just found.
//!   Wins exactly when the longest cycle of the permutation fits in the budget.
//! - [`RandomizedSequential`] ("Random"): open boxes in a fresh random order per player.
//! - [`FixedSequential`] ("Stubborn"): every player opens boxes `0, 1, 2, ..`.
//!
//! # Implementing a Custom Strategy
//! Only [`SearchStrategy::label`] and [`SearchStrategy::search`] are required. Team evaluation is
//! provided and stops at the first failing player.

use std::{convert::Infallible, num::NonZeroUsize};

use rand::Rng;

use crate::permutation::shuffled;

/// Maximum number of boxes a single player may open. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttemptBudget(NonZeroUsize);

impl AttemptBudget {
    /// Returns `None` for a budget of zero.
    pub fn new(attempts: usize) -> Option<Self> {
        NonZeroUsize::new(attempts).map(Self)
    }

    /// Half the team, rounded down, or a single attempt for teams of one (or zero) player.
    pub fn for_team(team_size: usize) -> Self {
        let attempts = if team_size > 1 { team_size / 2 } else { 1 };
        Self(NonZeroUsize::new(attempts).unwrap_or(NonZeroUsize::MIN))
    }

    /// Number of attempts as a plain integer.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

/// What happened to one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOutcome {
    /// The player's own number was discovered. `attempts_left` still counts the successful
    /// opening: a hit on the first box leaves the whole budget.
    Found {
        /// Budget remaining when the number turned up.
        attempts_left: usize,
    },
    /// The budget was spent without finding the number.
    Failed,
}

impl PlayerOutcome {
    /// `true` for [`PlayerOutcome::Found`].
    pub fn is_found(self) -> bool {
        matches!(self, PlayerOutcome::Found { .. })
    }
}

/// Opens boxes in `order` until `player` is found or the budget runs out.
///
/// The first box is always opened. An order that runs dry before the budget does counts as a
/// failure.
fn open_boxes(
    boxes: &[usize],
    player: usize,
    budget: AttemptBudget,
    order: impl IntoIterator<Item = usize>,
) -> PlayerOutcome {
    let mut attempts_left = budget.get();
    for box_index in order {
        let discovered = boxes[box_index];
        if discovered == player {
            return PlayerOutcome::Found { attempts_left };
        }
        attempts_left -= 1;
        if attempts_left == 0 {
            break;
        }
    }
    PlayerOutcome::Failed
}

/// A way for players to pick which boxes to open.
pub trait SearchStrategy {
    /// Short name used in reports (`"Magic"`, `"Random"`, `"Stubborn"`).
    fn label(&self) -> &'static str;

    /// Runs a single player's search over `boxes`.
    ///
    /// `boxes` must be a permutation of `0..boxes.len()` and `player` an index into it.
    /// Deterministic strategies ignore `rng`.
    fn search<R: Rng + ?Sized>(
        &self,
        boxes: &[usize],
        player: usize,
        budget: AttemptBudget,
        rng: &mut R,
    ) -> PlayerOutcome;

    /// Plays the whole team in order, handing each outcome to `observe`.
    ///
    /// Stops at the first failing player: later players are neither searched nor observed.
    /// Errors returned by `observe` abort the evaluation and are passed through.
    fn play_team<R, E, F>(
        &self,
        boxes: &[usize],
        budget: AttemptBudget,
        rng: &mut R,
        mut observe: F,
    ) -> Result<bool, E>
    where
        R: Rng + ?Sized,
        F: FnMut(usize, PlayerOutcome) -> Result<(), E>,
    {
        for player in 0..boxes.len() {
            let outcome = self.search(boxes, player, budget, rng);
            observe(player, outcome)?;
            if !outcome.is_found() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// `true` if every player finds their number.
    fn team_succeeds<R: Rng + ?Sized>(
        &self,
        boxes: &[usize],
        budget: AttemptBudget,
        rng: &mut R,
    ) -> bool {
        match self.play_team(boxes, budget, rng, |_, _| Ok::<(), Infallible>(())) {
            Ok(success) => success,
            Err(never) => match never {},
        }
    }
}

/// Follow the cycle that starts at your own box.
#[derive(Debug, Default, Clone, Copy)]
pub struct CycleFollowing;

impl SearchStrategy for CycleFollowing {
    fn label(&self) -> &'static str {
        "Magic"
    }

    fn search<R: Rng + ?Sized>(
        &self,
        boxes: &[usize],
        player: usize,
        budget: AttemptBudget,
        _rng: &mut R,
    ) -> PlayerOutcome {
        let order = std::iter::successors(Some(player), |&current| Some(boxes[current]));
        open_boxes(boxes, player, budget, order)
    }
}

/// Open boxes in an order drawn at random for each player.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomizedSequential;

impl SearchStrategy for RandomizedSequential {
    fn label(&self) -> &'static str {
        "Random"
    }

    fn search<R: Rng + ?Sized>(
        &self,
        boxes: &[usize],
        player: usize,
        budget: AttemptBudget,
        rng: &mut R,
    ) -> PlayerOutcome {
        let order = shuffled(boxes.len(), rng);
        open_boxes(boxes, player, budget, order)
    }
}

/// Everyone opens the boxes from the first one on.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedSequential;

impl SearchStrategy for FixedSequential {
    fn label(&self) -> &'static str {
        "Stubborn"
    }

    fn search<R: Rng + ?Sized>(
        &self,
        boxes: &[usize],
        player: usize,
        budget: AttemptBudget,
        _rng: &mut R,
    ) -> PlayerOutcome {
        open_boxes(boxes, player, budget, 0..boxes.len())
    }
}
