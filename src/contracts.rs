//! Runtime contracts for the verification engine.
//!
//! Debug-mode assertions for the invariants the engine's fast paths rely on.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!` and
//!    `cfg!(debug_assertions)` guards around the scans)
//! 2. Provide **early failure detection** during development
//! 3. Fail loudly instead of letting a merge silently drop patterns
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! The compare-exchange kernel is a two-pointer merge. It is only correct on
//! strictly increasing input. An unsorted or duplicated pattern list would not
//! crash anything; it would produce a wrong verdict.
//!
//! | Contract Function          | Property                                   |
//! |----------------------------|--------------------------------------------|
//! | `check_patterns_sorted`    | pattern list strictly increasing           |
//! | `check_cluster_partition`  | live clusters partition the wires          |
//! | `check_patterns_confined`  | patterns only use their cluster's wires    |
//!
//! # Usage
//!
//! ```ignore
//! use sortnet::contracts::*;
//!
//! // In debug builds, this panics if the list is out of order
//! check_patterns_sorted(&patterns);
//!
//! // In release builds, this is a no-op
//! ```

use crate::engine::ClusterArena;
use crate::types::{bit, Pattern};

// ============================================================================
// PATTERN LIST CONTRACTS
// ============================================================================

/// Check that a pattern list is strictly increasing (sorted, no duplicates).
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair that is not strictly increasing.
#[inline]
pub fn check_patterns_sorted(patterns: &[Pattern]) {
    if !cfg!(debug_assertions) {
        return;
    }
    for (k, pair) in patterns.windows(2).enumerate() {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: PatternList.StrictlySorted - \
             patterns[{}] = {:#b} >= patterns[{}] = {:#b}",
            k,
            pair[0],
            k + 1,
            pair[1]
        );
    }
}

/// Check that every pattern only sets bits inside `wire_mask`.
#[inline]
pub fn check_patterns_confined(patterns: &[Pattern], wire_mask: Pattern) {
    if !cfg!(debug_assertions) {
        return;
    }
    for (k, &p) in patterns.iter().enumerate() {
        debug_assert!(
            p & !wire_mask == 0,
            "Contract violation: Cluster.Confined - \
             patterns[{}] = {:#b} escapes wire mask {:#b}",
            k,
            p,
            wire_mask
        );
    }
}

// ============================================================================
// CLUSTER CONTRACTS
// ============================================================================

/// Check that live clusters partition the wires and own them consistently.
///
/// # Panics (debug builds only)
/// Panics if a wire maps to a dead slot, a slot lists a wire it does not own,
/// or a wire is missing from every cluster.
pub fn check_cluster_partition(arena: &ClusterArena) {
    if !cfg!(debug_assertions) {
        return;
    }
    let owners = arena.owners();
    let mut seen = vec![false; owners.len()];

    for (slot_id, cluster) in arena.slots().iter().enumerate() {
        let mut mask = 0;
        for &wire in &cluster.wires {
            debug_assert!(
                owners[wire] == slot_id,
                "Contract violation: Cluster.Partition - wire {} listed by slot {} but owned by {}",
                wire,
                slot_id,
                owners[wire]
            );
            debug_assert!(
                !seen[wire],
                "Contract violation: Cluster.Partition - wire {} in two clusters",
                wire
            );
            seen[wire] = true;
            mask |= bit(wire);
        }
        check_patterns_confined(&cluster.patterns, mask);
    }

    for (wire, covered) in seen.iter().enumerate() {
        debug_assert!(
            *covered,
            "Contract violation: Cluster.Partition - wire {} belongs to no cluster",
            wire
        );
    }
}
