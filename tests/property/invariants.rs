//! Invariants of verification reports that hold for every network.

use super::strategies::network;
use crate::common::{verify, TEST_BUDGET};
use proptest::prelude::*;
use sortnet::{Network, VerifyOptions};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Sorted inputs always survive, so no run ends below `N + 1`.
    #[test]
    fn prop_final_count_at_least_n_plus_one((n, pairs) in network(12, 40)) {
        let report = verify(n, &pairs);
        prop_assert!(report.final_patterns > n as u128);
        prop_assert_eq!(report.valid, report.final_patterns == n as u128 + 1);
    }

    /// Every merge removes exactly one cluster.
    #[test]
    fn prop_merges_account_for_clusters((n, pairs) in network(12, 40)) {
        let report = verify(n, &pairs);
        prop_assert_eq!(report.merges + report.clusters, n);
        prop_assert_eq!(report.comparators, pairs.len());
        prop_assert!(report.peak_cluster_patterns >= 2);
    }

    /// Running twice gives the same answer and the same report.
    #[test]
    fn prop_verify_is_idempotent((n, pairs) in network(10, 30)) {
        let mut net = Network::new(n, pairs).unwrap();
        let options = VerifyOptions::default().with_budget(TEST_BUDGET);
        let first = net.verify_with(options).unwrap();
        let second = net.verify_with(options).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(net.verify_status(), Some(first.valid));
    }

    /// A budget at the observed peak is always enough; one below never is.
    #[test]
    fn prop_peak_is_the_tight_budget((n, pairs) in network(10, 30)) {
        let report = verify(n, &pairs);
        prop_assume!(report.merges > 0);

        let tight = VerifyOptions::default().with_budget(report.peak_cluster_patterns);
        prop_assert_eq!(sortnet::verify_pairs(n, &pairs, tight).unwrap(), report.clone());

        let short = VerifyOptions::default().with_budget(report.peak_cluster_patterns - 1);
        prop_assert!(sortnet::verify_pairs(n, &pairs, short).is_err());
    }
}
