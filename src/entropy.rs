//! Entropy sources lent to contests.
//!
//! A contest borrows one [`Entropy`] for all of its draws: the per-round reshuffle and every
//! randomized player's inspection order. Create each source once and reuse it; recreating it per
//! round would bias the statistics.

use std::{fmt, str::FromStr};

use anyhow::bail;
use rand::{
    rngs::{OsRng, SmallRng, StdRng},
    RngCore, SeedableRng,
};

/// Which kind of entropy source a contest should draw from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntropyKind {
    /// Fast, non-cryptographic generator. Suited to a million rounds.
    #[default]
    Pseudo,
    /// Operating system randomness. Much slower, use fewer rounds.
    Secure,
}

impl fmt::Display for EntropyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropyKind::Pseudo => write!(f, "pseudo"),
            EntropyKind::Secure => write!(f, "secure"),
        }
    }
}

impl FromStr for EntropyKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pseudo") {
            Ok(EntropyKind::Pseudo)
        } else if s.eq_ignore_ascii_case("secure") {
            Ok(EntropyKind::Secure)
        } else {
            bail!("unknown entropy source '{s}' (expected 'pseudo' or 'secure')")
        }
    }
}

/// A concrete random source.
#[derive(Debug)]
pub enum Entropy {
    /// [`SmallRng`] seeded once from the OS.
    Pseudo(SmallRng),
    /// [`OsRng`], every draw goes to the OS.
    Secure(OsRng),
    /// [`StdRng`] with a fixed seed, for reproducible runs.
    Seeded(StdRng),
}

impl Entropy {
    /// Creates a source of the requested kind.
    pub fn new(kind: EntropyKind) -> Self {
        match kind {
            EntropyKind::Pseudo => Self::pseudo(),
            EntropyKind::Secure => Self::secure(),
        }
    }

    /// Fast generator seeded from the OS once.
    pub fn pseudo() -> Self {
        Entropy::Pseudo(SmallRng::from_entropy())
    }

    /// Cryptographically strong OS source.
    pub fn secure() -> Self {
        Entropy::Secure(OsRng)
    }

    /// Deterministic source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Entropy::Seeded(StdRng::seed_from_u64(seed))
    }
}

impl RngCore for Entropy {
    fn next_u32(&mut self) -> u32 {
        match self {
            Entropy::Pseudo(rng) => rng.next_u32(),
            Entropy::Secure(rng) => rng.next_u32(),
            Entropy::Seeded(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Entropy::Pseudo(rng) => rng.next_u64(),
            Entropy::Secure(rng) => rng.next_u64(),
            Entropy::Seeded(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Entropy::Pseudo(rng) => rng.fill_bytes(dest),
            Entropy::Secure(rng) => rng.fill_bytes(dest),
            Entropy::Seeded(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Entropy::Pseudo(rng) => rng.try_fill_bytes(dest),
            Entropy::Secure(rng) => rng.try_fill_bytes(dest),
            Entropy::Seeded(rng) => rng.try_fill_bytes(dest),
        }
    }
}

#[cfg(test)]
mod entropy_tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!("pseudo".parse::<EntropyKind>().unwrap(), EntropyKind::Pseudo);
        assert_eq!("SECURE".parse::<EntropyKind>().unwrap(), EntropyKind::Secure);
        assert!("quantum".parse::<EntropyKind>().is_err());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = Entropy::seeded(7);
        let mut b = Entropy::seeded(7);
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_every_kind_draws() {
        for kind in [EntropyKind::Pseudo, EntropyKind::Secure] {
            let mut rng = Entropy::new(kind);
            let x = rng.gen_range(0..=10);
            assert!(x <= 10, "{kind}: {x}");
        }
    }
}
