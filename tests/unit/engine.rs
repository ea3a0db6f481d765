//! Verification engine scenarios on published and hand-built networks.

use crate::common::{
    assert_matches_oracle, broken_ten_input, insertion_network, odd_even_merge_sort, verify,
    TEN_INPUT_DEPTH_8,
};
use sortnet::{is_sorted_pattern, Network, NetworkError, VerifyOptions};

#[test]
fn test_published_ten_input_network() {
    let report = verify(10, &TEN_INPUT_DEPTH_8);
    assert!(report.valid);
    assert_eq!(report.final_patterns, 11);
    assert_eq!(report.clusters, 1);
    assert_eq!(report.merges, 9);
    assert_eq!(report.unsorted_output, None);
}

#[test]
fn test_broken_ten_input_network() {
    let report = verify(10, &broken_ten_input());
    assert!(!report.valid);
    assert_ne!(report.final_patterns, 11);
    let witness = report.unsorted_output.expect("an invalid network has a witness");
    assert!(!is_sorted_pattern(witness, 10));
    assert_matches_oracle(10, &broken_ten_input());
}

#[test]
fn test_batcher_networks_are_valid() {
    for n in [2, 3, 5, 8, 13, 16, 20] {
        let report = verify(n, &odd_even_merge_sort(n));
        assert!(report.valid, "batcher network for {} inputs", n);
        assert_eq!(report.final_patterns, n as u128 + 1);
    }
}

#[test]
fn test_insertion_networks_are_valid() {
    for n in 1..=12 {
        assert!(verify(n, &insertion_network(n)).valid, "insertion {}", n);
    }
}

#[test]
fn test_truncated_batcher_is_invalid() {
    let mut pairs = odd_even_merge_sort(8);
    pairs.pop();
    assert!(!verify(8, &pairs).valid);
    assert_matches_oracle(8, &pairs);
}

#[test]
fn test_three_wire_chain() {
    assert!(verify(3, &[(0, 1), (1, 2), (0, 1)]).valid);

    let report = verify(3, &[(0, 1), (1, 2)]);
    assert!(!report.valid);
    assert_eq!(report.final_patterns, 5);
}

#[test]
fn test_unconnected_wire_is_invalid() {
    // wire 2 never meets a comparator
    let report = verify(3, &[(0, 1)]);
    assert!(!report.valid);
    assert_eq!(report.clusters, 2);
    assert_eq!(report.final_patterns, 6);
    assert_eq!(report.unsorted_output, Some(0b011));
}

#[test]
fn test_empty_network() {
    assert!(verify(1, &[]).valid);

    let report = verify(4, &[]);
    assert!(!report.valid);
    assert_eq!(report.final_patterns, 16);
    assert_eq!(report.merges, 0);
}

#[test]
fn test_redundant_comparators_do_not_change_verdict() {
    let mut pairs = odd_even_merge_sort(6);
    let with_repeats: Vec<_> = pairs.iter().flat_map(|&p| [p, p]).collect();
    assert!(verify(6, &with_repeats).valid);
    pairs.extend([(0, 5), (2, 3)]);
    assert!(verify(6, &pairs).valid);
}

#[test]
fn test_network_verify_records_status() {
    let mut net = Network::new(10, TEN_INPUT_DEPTH_8).unwrap();
    assert_eq!(net.verify_status(), None);
    assert!(net.verify(false).unwrap());
    assert_eq!(net.verify_status(), Some(true));

    let err = net
        .verify_with(VerifyOptions::default().with_budget(1))
        .unwrap_err();
    assert!(matches!(err, NetworkError::VerifierResourceExceeded { .. }));
    assert_eq!(net.verify_status(), None);
}

#[test]
fn test_local_budget_error_details() {
    let err = sortnet::verify_pairs(
        4,
        &[(0, 1), (2, 3), (0, 2)],
        VerifyOptions::default().with_budget(8),
    )
    .unwrap_err();

    match err {
        NetworkError::VerifierResourceExceeded {
            cluster_sizes,
            pattern_counts,
            product,
            budget,
            ..
        } => {
            assert_eq!(cluster_sizes, (2, 2));
            assert_eq!(pattern_counts, (3, 3));
            assert_eq!(product, 9);
            assert_eq!(budget, 8);
        }
        other => panic!("expected a budget error, got {:?}", other),
    }
}

#[test]
fn test_verbose_run_matches_quiet_run() {
    let quiet = verify(10, &TEN_INPUT_DEPTH_8);
    let loud = sortnet::verify_pairs(
        10,
        &TEN_INPUT_DEPTH_8,
        VerifyOptions::verbose().with_budget(crate::common::TEST_BUDGET),
    )
    .unwrap();
    assert_eq!(quiet, loud);
}

#[test]
fn test_verify_pairs_rejects_bad_sizes() {
    let opts = VerifyOptions::default().with_budget(100);
    assert_eq!(
        sortnet::verify_pairs(0, &[], opts).unwrap_err(),
        NetworkError::InvalidSize { inputs: 0, max: 64 }
    );
    assert_eq!(
        sortnet::verify_pairs(65, &[(0, 64)], opts).unwrap_err(),
        NetworkError::InvalidSize { inputs: 65, max: 64 }
    );
}
