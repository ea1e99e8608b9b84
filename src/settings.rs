//! Parameters of a single contest.
//!
//! A contest is defined by its team size (number of players, and of boxes), the number of
//! independent rounds to play, the console verbosity and the kind of entropy source to draw from.
//!
//! # Example
//!
//! ```
//! use prisoners_contest::prelude::*;
//!
//! let settings = ContestSettingsBuilder::new()
//!     .with_team_size(100)
//!     .with_game_rounds(10_000)
//!     .with_verbosity(1)
//!     .with_entropy(EntropyKind::Pseudo)
//!     .build()
//!     .unwrap();
//! assert_eq!(settings.attempt_budget().get(), 50);
//! ```
//!
//! Settings can also be read from environment variables with
//! [`ContestSettingsBuilder::from_env()`].

use std::env;

use anyhow::bail;
use tracing::warn;

use crate::entropy::EntropyKind;
use crate::search_strategy::AttemptBudget;

/// Validated parameters of a contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContestSettings {
    team_size: usize,
    game_rounds: u64,
    verbosity: u8,
    entropy: EntropyKind,
}

impl ContestSettings {
    /// Number of players, which is also the number of boxes.
    pub fn team_size(&self) -> usize {
        self.team_size
    }

    /// Number of independent rounds.
    pub fn game_rounds(&self) -> u64 {
        self.game_rounds
    }

    /// Console verbosity (see [`Reporter`](crate::report::Reporter)).
    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }

    /// Entropy source to draw from.
    pub fn entropy(&self) -> EntropyKind {
        self.entropy
    }

    /// Attempts each player gets, shared by every strategy.
    pub fn attempt_budget(&self) -> AttemptBudget {
        AttemptBudget::for_team(self.team_size)
    }

    /// The four contests of the classic demonstration:
    ///
    /// | entropy | players | rounds    | verbosity |
    /// |---------|---------|-----------|-----------|
    /// | secure  | 42      | 5         | 3         |
    /// | pseudo  | 17      | 1 000 000 | 1         |
    /// | secure  | 1       | 1         | 1         |
    /// | pseudo  | 100     | 1 000 000 | 1         |
    ///
    /// 17 players leave the random team a slim chance; 100 is the puzzle as usually told.
    pub fn classic_lineup() -> Vec<ContestSettings> {
        [
            (EntropyKind::Secure, 42, 5, 3),
            (EntropyKind::Pseudo, 17, 1_000_000, 1),
            (EntropyKind::Secure, 1, 1, 1),
            (EntropyKind::Pseudo, 100, 1_000_000, 1),
        ]
        .into_iter()
        .map(|(entropy, team_size, game_rounds, verbosity)| ContestSettings {
            team_size,
            game_rounds,
            verbosity,
            entropy,
        })
        .collect()
    }
}

/// A builder for [`ContestSettings`].
///
/// Defaults: 100 players, 1000 rounds, verbosity 1, pseudo-random entropy.
#[derive(Debug, Clone, Copy)]
pub struct ContestSettingsBuilder {
    team_size: usize,
    game_rounds: u64,
    verbosity: u8,
    entropy: EntropyKind,
}

impl Default for ContestSettingsBuilder {
    fn default() -> Self {
        Self {
            team_size: 100,
            game_rounds: 1000,
            verbosity: 1,
            entropy: EntropyKind::Pseudo,
        }
    }
}

impl ContestSettingsBuilder {
    /// Creates a builder with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from environment variables, falling back to the defaults for anything
    /// unset or unparseable.
    ///
    /// Read environment variables are:
    /// - `CONTEST_TEAM_SIZE` (usize): number of players
    /// - `CONTEST_GAME_ROUNDS` (u64): number of rounds
    /// - `CONTEST_VERBOSITY` (u8): 0 to 3
    /// - `CONTEST_ENTROPY` (string): `pseudo` or `secure`, case-insensitive
    #[must_use]
    pub fn from_env() -> Self {
        fn parse_var<T: std::str::FromStr>(var: &str) -> Option<T> {
            let value = env::var(var).ok()?;
            let parsed = value.trim().parse().ok();
            if parsed.is_none() {
                warn!("ignoring unparseable {var}={value:?}");
            }
            parsed
        }

        let default = Self::default();
        Self {
            team_size: parse_var("CONTEST_TEAM_SIZE").unwrap_or(default.team_size),
            game_rounds: parse_var("CONTEST_GAME_ROUNDS").unwrap_or(default.game_rounds),
            verbosity: parse_var("CONTEST_VERBOSITY").unwrap_or(default.verbosity),
            entropy: parse_var("CONTEST_ENTROPY").unwrap_or(default.entropy),
        }
    }

    /// Sets the number of players (and boxes).
    #[must_use]
    pub fn with_team_size(self, team_size: usize) -> Self {
        Self { team_size, ..self }
    }

    /// Sets the number of rounds.
    #[must_use]
    pub fn with_game_rounds(self, game_rounds: u64) -> Self {
        Self {
            game_rounds,
            ..self
        }
    }

    /// Sets the console verbosity.
    #[must_use]
    pub fn with_verbosity(self, verbosity: u8) -> Self {
        Self { verbosity, ..self }
    }

    /// Selects the entropy source.
    #[must_use]
    pub fn with_entropy(self, entropy: EntropyKind) -> Self {
        Self { entropy, ..self }
    }

    /// Builds the settings.
    ///
    /// # Errors
    /// Returned when the team is empty or no round is to be played.
    pub fn build(self) -> anyhow::Result<ContestSettings> {
        if self.team_size == 0 {
            bail!("team size must be at least 1");
        }
        if self.game_rounds == 0 {
            bail!("at least one game round must be played");
        }
        Ok(ContestSettings {
            team_size: self.team_size,
            game_rounds: self.game_rounds,
            verbosity: self.verbosity,
            entropy: self.entropy,
        })
    }
}

#[cfg(test)]
mod settings_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ContestSettingsBuilder::new().build().unwrap();
        assert_eq!(settings.team_size(), 100);
        assert_eq!(settings.game_rounds(), 1000);
        assert_eq!(settings.verbosity(), 1);
        assert_eq!(settings.entropy(), EntropyKind::Pseudo);
        assert_eq!(settings.attempt_budget().get(), 50);
    }

    #[test]
    fn test_rejects_empty_contest() {
        assert!(ContestSettingsBuilder::new()
            .with_team_size(0)
            .build()
            .is_err());
        assert!(ContestSettingsBuilder::new()
            .with_game_rounds(0)
            .build()
            .is_err());
    }

    #[test]
    fn test_single_player_budget() {
        let settings = ContestSettingsBuilder::new()
            .with_team_size(1)
            .build()
            .unwrap();
        assert_eq!(settings.attempt_budget().get(), 1);
    }

    #[test]
    fn test_from_env() {
        // only this test touches these variables
        env::set_var("CONTEST_TEAM_SIZE", "17");
        env::set_var("CONTEST_GAME_ROUNDS", "not a number");
        env::set_var("CONTEST_VERBOSITY", " 2 ");
        env::set_var("CONTEST_ENTROPY", "Secure");
        let settings = ContestSettingsBuilder::from_env().build().unwrap();
        env::remove_var("CONTEST_TEAM_SIZE");
        env::remove_var("CONTEST_GAME_ROUNDS");
        env::remove_var("CONTEST_VERBOSITY");
        env::remove_var("CONTEST_ENTROPY");

        assert_eq!(settings.team_size(), 17);
        assert_eq!(settings.game_rounds(), 1000);
        assert_eq!(settings.verbosity(), 2);
        assert_eq!(settings.entropy(), EntropyKind::Secure);
    }

    #[test]
    fn test_classic_lineup() {
        let lineup = ContestSettings::classic_lineup();
        assert_eq!(lineup.len(), 4);
        assert_eq!(lineup[0].team_size(), 42);
        assert_eq!(lineup[0].verbosity(), 3);
        assert_eq!(lineup[2].attempt_budget().get(), 1);
        assert_eq!(lineup[3].game_rounds(), 1_000_000);
        assert_eq!(lineup[3].entropy(), EntropyKind::Pseudo);
    }
}
