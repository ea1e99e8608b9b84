//! Sanity check that a box buffer still holds a permutation.

use thiserror::Error;

/// A box buffer that is not a permutation of `0..n`.
///
/// `value` is the smallest in-range value whose occurrence count is not exactly one. A value
/// outside `0..n` is not counted, so it always shows up as some in-range value missing.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("Data is corrupted! value {value} appears {count} time(s)")]
pub struct DataCorruption {
    /// The offending value.
    pub value: usize,
    /// How many times it was found.
    pub count: usize,
}

/// Verifies that each value of `0..data.len()` appears exactly once in `data`.
///
/// Costs `O(n)` time and memory; the contest driver calls it once per contest, not per round.
pub fn validate(data: &[usize]) -> Result<(), DataCorruption> {
    let mut counters = vec![0usize; data.len()];
    for &value in data {
        if let Some(counter) = counters.get_mut(value) {
            *counter += 1;
        }
    }
    match counters.iter().position(|&count| count != 1) {
        Some(value) => Err(DataCorruption {
            value,
            count: counters[value],
        }),
        None => Ok(()),
    }
}
