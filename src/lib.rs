//! # Prisoners Contest
//!
//! A Monte Carlo simulation of the "100 prisoners" puzzle: `N` players, each looking for their
//! own number among `N` boxes that hold a random permutation of `0..N`, may each open at most
//! `N / 2` boxes. The team only wins if every single player finds their number.
//!
//! It provides:
//! - Uniform random permutations (in-place Fisher-Yates) in [`permutation`]
//! - A permutation integrity check in [`integrity`]
//! - Box-opening strategies via the [`SearchStrategy`](crate::search_strategy::SearchStrategy)
//!   trait, with the three built-in teams *Magic* (cycle following), *Random* and *Stubborn*
//! - A [`ContestDriver`](crate::contest::ContestDriver) playing many rounds and tallying wins
//! - Console reporting gated by verbosity in [`report`]
//!
//! All three teams play against the very same permutation each round. Cycle following wins
//! about 31% of the time with 100 players, the two other teams practically never do.
//!
//! # Documentation Overview
//!
//! - For contest parameters and the classic lineup, see
//!   [`ContestSettings`](crate::settings::ContestSettings).
//! - For choosing between a fast and a cryptographically strong source, see [`entropy`].
//! - For process-level behaviour (file logging), see
//!   [`Configuration`](crate::configuration::Configuration).
//!
//! # Usage Example
//!
//! ```no_run
//! use prisoners_contest::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = ContestSettingsBuilder::new()
//!         .with_team_size(100)
//!         .with_game_rounds(1_000_000)
//!         .with_verbosity(1)
//!         .build()?;
//!
//!     // do not re-create the entropy source between contests or rounds
//!     let mut rng = Entropy::new(settings.entropy());
//!     let tally = ContestDriver::new(&mut rng)
//!         .run(&settings, &mut Reporter::stdout(settings.verbosity()))?;
//!
//!     println!("cycle following won {} rounds", tally.magic);
//!     Ok(())
//! }
//! ```
#![warn(missing_docs)]

pub use anyhow;
pub mod configuration;
pub mod contest;
pub mod entropy;
pub mod integrity;
pub mod logger;
pub mod permutation;
pub mod report;
pub mod search_strategy;
pub mod settings;

/// Commonly used types and traits for quick access.
///
/// Import this prelude to get started easily:
/// ```rust
/// use prisoners_contest::prelude::*;
/// ```
///
/// Includes:
/// - [`ContestSettingsBuilder`](crate::settings::ContestSettingsBuilder)
/// - [`ContestDriver`](crate::contest::ContestDriver) and
///   [`ScoreTally`](crate::contest::ScoreTally)
/// - [`Entropy`](crate::entropy::Entropy) and [`EntropyKind`](crate::entropy::EntropyKind)
/// - all built-in [`search strategies`](crate::search_strategy)
pub mod prelude {
    pub use crate::configuration::Configuration;
    pub use crate::contest::{ContestDriver, ScoreTally};
    pub use crate::entropy::{Entropy, EntropyKind};
    pub use crate::integrity::DataCorruption;
    pub use crate::report::Reporter;
    pub use crate::search_strategy::*;
    pub use crate::settings::{ContestSettings, ContestSettingsBuilder};
}
