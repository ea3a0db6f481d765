//! Test utilities shared across unit tests, integration tests, benches and
//! fuzz targets.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical networks and a brute-force oracle so every test
//! suite agrees on what "correct" means.

#![doc(hidden)]

use crate::types::{all_wires_mask, Pair, Pattern};
use std::collections::BTreeSet;

/// Published 10-input sorting network: 29 comparators, depth 8.
pub const TEN_INPUT_DEPTH_8: [Pair; 29] = [
    (0, 8), (1, 9), (2, 7), (3, 5), (4, 6), (0, 2), (1, 4), (5, 8), (7, 9), (0, 3),
    (2, 4), (5, 7), (6, 9), (0, 1), (3, 6), (8, 9), (1, 5), (2, 3), (4, 8), (6, 7),
    (1, 2), (3, 5), (4, 6), (7, 8), (2, 3), (4, 5), (6, 7), (3, 4), (5, 6),
];

/// [`TEN_INPUT_DEPTH_8`] with its fifth comparator `(4,6)` replaced by `(4,5)`.
pub fn broken_ten_input() -> Vec<Pair> {
    let mut pairs = TEN_INPUT_DEPTH_8.to_vec();
    pairs[4] = (4, 5);
    pairs
}

/// Batcher's odd-even merge sort for any number of inputs.
pub fn odd_even_merge_sort(inputs: usize) -> Vec<Pair> {
    let mut pairs = Vec::new();
    let mut p = 1;
    while p < inputs {
        let mut k = p;
        while k >= 1 {
            let mut j = k % p;
            while j + k < inputs {
                for i in 0..k {
                    let (lo, hi) = (i + j, i + j + k);
                    if hi < inputs && lo / (2 * p) == hi / (2 * p) {
                        pairs.push((lo, hi));
                    }
                }
                j += 2 * k;
            }
            k /= 2;
        }
        p *= 2;
    }
    pairs
}

/// Insertion sort as a network: `n(n-1)/2` adjacent comparators.
pub fn insertion_network(inputs: usize) -> Vec<Pair> {
    let mut pairs = Vec::new();
    for top in 1..inputs {
        for lo in (0..top).rev() {
            pairs.push((lo, lo + 1));
        }
    }
    pairs
}

/// Run the network on one binary input.
pub fn apply_network(pairs: &[Pair], mut pattern: Pattern) -> Pattern {
    for &(i, j) in pairs {
        let (bi, bj) = (1 << i, 1 << j);
        if pattern & bi != 0 && pattern & bj == 0 {
            pattern ^= bi | bj;
        }
    }
    pattern
}

/// Every output of the network over all `2^inputs` binary inputs.
///
/// Exponential; keep `inputs` small.
pub fn reachable_outputs(inputs: usize, pairs: &[Pair]) -> BTreeSet<Pattern> {
    assert!(inputs <= 24, "brute force over {} inputs is too slow", inputs);
    (0..=all_wires_mask(inputs))
        .map(|input| apply_network(pairs, input))
        .collect()
}

/// Brute-force 0/1-principle check.
pub fn sorts_all_binary_inputs(inputs: usize, pairs: &[Pair]) -> bool {
    let all = all_wires_mask(inputs);
    (0..=all).all(|input| {
        let zeros = !apply_network(pairs, input) & all;
        zeros & zeros.wrapping_add(1) == 0
    })
}
