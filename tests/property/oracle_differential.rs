//! Differential testing: the clustered engine against brute force.
//!
//! The oracle runs every binary input through the network. If they
//! disagree, the oracle is right.

use super::strategies::{network, padded_sorter};
use crate::common::{reachable_outputs, sorts_all_binary_inputs, verify};
use proptest::prelude::*;
use sortnet::is_sorted_pattern;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The verdict matches the 0/1-principle checked exhaustively.
    #[test]
    fn diff_verdict_matches_brute_force((n, pairs) in network(8, 30)) {
        let report = verify(n, &pairs);
        prop_assert_eq!(report.valid, sorts_all_binary_inputs(n, &pairs));
    }

    /// The witness for an invalid network is a reachable, unsorted output.
    #[test]
    fn diff_witness_is_reachable((n, pairs) in network(7, 20)) {
        let report = verify(n, &pairs);
        match report.unsorted_output {
            Some(witness) => {
                prop_assert!(!report.valid);
                prop_assert!(!is_sorted_pattern(witness, n));
                prop_assert!(reachable_outputs(n, &pairs).contains(&witness));
            }
            None => prop_assert!(report.valid),
        }
    }

    /// Once everything is one cluster, the count is the number of
    /// distinct reachable outputs.
    #[test]
    fn diff_single_cluster_counts_reachable_outputs((n, pairs) in network(7, 25)) {
        let report = verify(n, &pairs);
        if report.clusters == 1 {
            prop_assert_eq!(report.final_patterns, reachable_outputs(n, &pairs).len() as u128);
        }
    }

    /// Sorters stay sorters after arbitrary comparators in front.
    #[test]
    fn diff_padded_sorters_are_valid((n, pairs) in padded_sorter(10)) {
        prop_assert!(verify(n, &pairs).valid);
    }
}
