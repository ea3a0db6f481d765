//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sortnet::{verify_pairs, Pair, VerificationReport, VerifyOptions};
use std::collections::BTreeMap;

// Re-export canonical test utilities from sortnet::testing
pub use sortnet::testing::{
    apply_network, broken_ten_input, insertion_network, odd_even_merge_sort, reachable_outputs,
    sorts_all_binary_inputs, TEN_INPUT_DEPTH_8,
};

/// Budget large enough for every network the test suites build.
pub const TEST_BUDGET: usize = 1 << 24;

/// Verify with a local budget so tests never read the global setting.
pub fn verify(inputs: usize, pairs: &[Pair]) -> VerificationReport {
    verify_pairs(inputs, pairs, VerifyOptions::default().with_budget(TEST_BUDGET))
        .expect("test networks stay within the test budget")
}

/// Multiset of comparators, for order-insensitive comparisons.
pub fn pair_counts(pairs: &[Pair]) -> BTreeMap<Pair, usize> {
    let mut counts = BTreeMap::new();
    for &p in pairs {
        *counts.entry(p).or_insert(0) += 1;
    }
    counts
}

/// Assert that a report agrees with the brute-force oracle.
pub fn assert_matches_oracle(inputs: usize, pairs: &[Pair]) {
    let report = verify(inputs, pairs);
    let expected = sorts_all_binary_inputs(inputs, pairs);
    assert_eq!(
        report.valid, expected,
        "engine says {} but brute force says {} for {} inputs: {:?}",
        report.valid, expected, inputs, pairs
    );
    if let Some(witness) = report.unsorted_output {
        assert!(
            reachable_outputs(inputs, pairs).contains(&witness),
            "witness {:#b} is not a reachable output",
            witness
        );
    }
}
