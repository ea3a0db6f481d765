//! Cluster arena and compare-exchange kernel driven through the public API.

use crate::common::{odd_even_merge_sort, reachable_outputs, TEST_BUDGET};
use sortnet::engine::{apply_compare_exchange, cross_product, sorted_patterns, ClusterArena};
use sortnet::{all_wires_mask, bit, Pattern};

fn is_strictly_ascending(patterns: &[Pattern]) -> bool {
    patterns.windows(2).all(|w| w[0] < w[1])
}

/// Replay a network in order, merging on demand.
fn replay(inputs: usize, pairs: &[(usize, usize)]) -> ClusterArena {
    let mut arena = ClusterArena::singletons(inputs);
    for &(i, j) in pairs {
        if !arena.same_cluster(i, j) {
            arena.merge(i, j, TEST_BUDGET).unwrap();
        }
        arena.apply(i, j);
    }
    arena
}

#[test]
fn test_replay_keeps_wires_partitioned() {
    let arena = replay(9, &odd_even_merge_sort(9));
    let mut seen: Vec<usize> = arena.live().flat_map(|c| c.wires.iter().copied()).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..9).collect::<Vec<_>>());
    assert_eq!(arena.live_count(), 1);
}

#[test]
fn test_single_cluster_holds_exactly_the_reachable_outputs() {
    let pairs = [(0, 2), (1, 3), (0, 1), (2, 3)];
    let arena = replay(4, &pairs);
    assert_eq!(arena.live_count(), 1);

    let expected: Vec<Pattern> = reachable_outputs(4, &pairs).into_iter().collect();
    assert_eq!(arena.cluster_for(0).patterns, expected);
}

#[test]
fn test_patterns_stay_sorted_and_confined() {
    let pairs = [(0, 3), (1, 4), (0, 1), (3, 4), (2, 5)];
    let arena = replay(6, &pairs);
    for cluster in arena.live() {
        assert!(is_strictly_ascending(&cluster.patterns));
        let mask = cluster.all_ones();
        assert!(cluster.patterns.iter().all(|&p| p & !mask == 0));
    }
}

#[test]
fn test_compare_exchange_never_grows_a_list() {
    let all: Vec<Pattern> = (0..=all_wires_mask(5)).collect();
    for i in 0..5 {
        for j in i + 1..5 {
            let out = apply_compare_exchange(&all, i, j);
            assert!(out.len() <= all.len());
            assert!(is_strictly_ascending(&out));
            // exactly the inputs with a 1 on i and 0 on j disappear
            assert_eq!(out.len(), all.len() - all.len() / 4);
        }
    }
}

#[test]
fn test_compare_exchange_keeps_sorted_patterns() {
    let sorted = sorted_patterns(7);
    assert_eq!(sorted.len(), 8);
    for i in 0..7 {
        for j in i + 1..7 {
            assert_eq!(apply_compare_exchange(&sorted, i, j), sorted);
        }
    }
}

#[test]
fn test_cross_product_of_disjoint_lists() {
    let a = vec![0, bit(0), bit(0) | bit(2)];
    let b = vec![0, bit(1)];
    let product = cross_product(&a, &b);
    assert_eq!(product, vec![0b000, 0b001, 0b010, 0b011, 0b101, 0b111]);
}
