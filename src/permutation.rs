//! Box contents: uniform random permutations of `0..n`.
//!
//! Box `i` holds the value `boxes[i]`. Every round of a contest reshuffles the same buffer in
//! place with [`shuffle`]; the randomized strategy draws a fresh inspection order per player with
//! [`shuffled`].

use rand::Rng;

/// Writes the identity sequence `0, 1, .., n-1` into `data`.
pub fn fill_identity(data: &mut [usize]) {
    for (i, slot) in data.iter_mut().enumerate() {
        *slot = i;
    }
}

/// In-place Fisher-Yates shuffle.
///
/// For `i` from `n-1` down to `1`, draws `j` uniformly in `0..=i` and swaps `data[i]` with
/// `data[j]`. Each of the `n!` orderings of the input is equally likely. Slices of length 0 or 1
/// are left untouched and no entropy is consumed.
pub fn shuffle<R: Rng + ?Sized>(data: &mut [usize], rng: &mut R) {
    for i in (1..data.len()).rev() {
        let j = rng.gen_range(0..=i);
        data.swap(i, j);
    }
}

/// Returns a freshly drawn random permutation of `0..len`.
pub fn shuffled<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut data = vec![0; len];
    fill_identity(&mut data);
    shuffle(&mut data, rng);
    data
}

/// Length of the longest cycle of `boxes` seen as the function `i -> boxes[i]`.
///
/// `boxes` must be a permutation of `0..boxes.len()`. The cycle-following strategy wins exactly
/// when this is at most the attempt budget.
pub fn longest_cycle(boxes: &[usize]) -> usize {
    let mut visited = vec![false; boxes.len()];
    let mut longest = 0;
    for start in 0..boxes.len() {
        let mut len = 0;
        let mut current = start;
        while !visited[current] {
            visited[current] = true;
            current = boxes[current];
            len += 1;
        }
        longest = longest.max(len);
    }
    longest
}

#[cfg(test)]
mod permutation_tests {
    use std::collections::HashMap;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::integrity::validate;

    #[test]
    fn test_fill_identity() {
        let mut data = vec![7; 5];
        fill_identity(&mut data);
        assert_eq!(data, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_shuffle_keeps_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 0..64 {
            let mut data = vec![0; n];
            fill_identity(&mut data);
            for _ in 0..10 {
                shuffle(&mut data, &mut rng);
                assert!(validate(&data).is_ok(), "n = {n}: {data:?}");
            }
        }
    }

    #[test]
    fn test_trivial_lengths() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(shuffled(0, &mut rng).is_empty());
        assert_eq!(shuffled(1, &mut rng), vec![0]);
    }

    #[test]
    fn test_shuffle_is_uniform() {
        // chi-square goodness of fit over the 24 orderings of 4 elements
        const SAMPLES: usize = 24_000;
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<Vec<usize>, usize> = HashMap::new();
        for _ in 0..SAMPLES {
            *counts.entry(shuffled(4, &mut rng)).or_default() += 1;
        }
        assert_eq!(counts.len(), 24, "every ordering must be reachable");

        let expected = SAMPLES as f64 / 24.0;
        let chi_square: f64 = counts
            .values()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();
        // 23 degrees of freedom, p = 0.001 critical value is 49.73
        assert!(chi_square < 49.73, "chi-square too large: {chi_square}");
    }

    #[test]
    fn test_longest_cycle() {
        assert_eq!(longest_cycle(&[]), 0);
        assert_eq!(longest_cycle(&[0]), 1);
        assert_eq!(longest_cycle(&[0, 1, 2, 3]), 1);
        assert_eq!(longest_cycle(&[1, 0, 3, 2]), 2);
        assert_eq!(longest_cycle(&[1, 2, 3, 0]), 4);
        assert_eq!(longest_cycle(&[2, 0, 1, 4, 3]), 3);
    }
}
