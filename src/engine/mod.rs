// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sorting-network verification by incremental cluster merging.
//!
//! By the 0/1-principle a network sorts everything iff it sorts every binary
//! input. Tracking all `2^N` inputs at once is hopeless past ~30 wires, so the
//! engine starts from `N` independent one-wire clusters (`{0, 2^k}` each) and
//! only combines two clusters when a comparator first connects them. Between
//! merges, compare-exchanges shrink the pattern lists in place.
//!
//! ```text
//!   wire 0 ─┐{0,1}
//!           ├─ merge ─▶ {0,1,2,3} ─ CE(0,1) ─▶ {0,2,3} ─┐
//!   wire 1 ─┘{0,2}                                      ├─ merge ─▶ ...
//!   wire 2 ──{0,4} ─────────────────────────────────────┘
//! ```
//!
//! At the end a sorter leaves exactly the `N + 1` sorted patterns. Any other
//! product of cluster sizes means some binary input is left unsorted.
//!
//! Memory is bounded by the pattern budget: a merge whose cross product would
//! exceed it fails with [`NetworkError::VerifierResourceExceeded`] before any
//! allocation happens.

mod clusters;
mod patterns;
mod schedule;

pub use clusters::{Cluster, ClusterArena, MergeOutcome};
pub use patterns::{apply_compare_exchange, cross_product, is_sorted_pattern, sorted_patterns};
pub use schedule::Worklist;

use crate::config::VerifyOptions;
use crate::error::NetworkError;
use crate::types::{Pair, Pattern};
use serde::Serialize;

/// Everything a verification run learned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub valid: bool,
    pub inputs: usize,
    pub comparators: usize,
    /// Product of the final clusters' pattern counts.
    pub final_patterns: u128,
    /// Clusters still independent at the end.
    pub clusters: usize,
    pub merges: usize,
    /// Largest pattern list held by any cluster during the run.
    pub peak_cluster_patterns: usize,
    /// A reachable output that is not sorted; `None` for sorters.
    pub unsorted_output: Option<Pattern>,
}

/// Verification engine for one wire count.
///
/// Holds only configuration; every [`run`](Verifier::run) builds and drops
/// its own cluster state.
#[derive(Debug, Clone, Copy)]
pub struct Verifier {
    inputs: usize,
    budget: usize,
    verbose: bool,
}

impl Verifier {
    pub fn new(inputs: usize, options: VerifyOptions) -> Self {
        Self {
            inputs,
            budget: options.effective_budget(),
            verbose: options.verbose,
        }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Verify `pairs`, which must already be validated against `inputs`.
    ///
    /// An `inputs` of zero or above [`MAX_INPUTS`](crate::MAX_INPUTS) is
    /// rejected with `InvalidSize` before any pattern is built.
    ///
    /// Every pair must be ascending (`i < j`). The verdict relies on sorted
    /// inputs passing through unchanged, which a descending comparator breaks.
    pub fn run(&self, pairs: &[Pair]) -> Result<VerificationReport, NetworkError> {
        NetworkError::check_size(self.inputs)?;
        let n = self.inputs;
        if self.verbose {
            tracing::info!(
                inputs = n,
                comparators = pairs.len(),
                "verifying network with {} inputs, {} CE's; starting with {} clusters of 2 patterns, 2^{} binary patterns combined",
                n,
                pairs.len(),
                n,
                n
            );
        }

        let mut arena = ClusterArena::singletons(n);
        let mut worklist = Worklist::new(pairs);
        let mut merges = 0;
        let mut peak = arena.live().map(|c| c.patterns.len()).max().unwrap_or(0);
        let mut applied = 0;

        while let Some((i, j)) = worklist.front() {
            if !arena.same_cluster(i, j) {
                let outcome = arena.merge(i, j, self.budget)?;
                merges += 1;
                peak = peak.max(outcome.patterns);
                if self.verbose {
                    tracing::info!(
                        lo = i,
                        hi = j,
                        patterns = outcome.patterns,
                        "combining clusters containing inputs {} and {}, resulting in {} patterns",
                        i,
                        j,
                        outcome.patterns
                    );
                }

                let promoted = worklist.promote_ready(n, |a, b| arena.same_cluster(a, b));
                tracing::trace!(promoted, pending = worklist.len(), "worklist reordered");
            }

            let left = arena.apply(i, j);
            worklist.pop_front();
            applied += 1;

            if self.verbose {
                tracing::info!(
                    lo = i,
                    hi = j,
                    cluster_patterns = left,
                    "applied CE for {} and {}: {} patterns remaining in cluster; {} total after {} CE's",
                    i,
                    j,
                    left,
                    arena.total_patterns(),
                    applied
                );
            }
        }

        let final_patterns = arena.total_patterns();
        let valid = final_patterns == n as u128 + 1;
        let unsorted_output = if valid { None } else { unsorted_output(&arena) };

        if self.verbose {
            tracing::info!(
                "a valid sorter requires exactly {} remaining patterns at this point: {}",
                n + 1,
                if valid { "PASS" } else { "FAIL" }
            );
        }
        tracing::debug!(
            inputs = n,
            comparators = pairs.len(),
            merges,
            final_patterns = %final_patterns,
            valid,
            "verification finished"
        );

        Ok(VerificationReport {
            valid,
            inputs: n,
            comparators: pairs.len(),
            final_patterns,
            clusters: arena.live_count(),
            merges,
            peak_cluster_patterns: peak,
            unsorted_output,
        })
    }
}

/// Find a reachable output pattern that is not sorted.
///
/// With one cluster left this scans its list. With several, any cluster that
/// misses the top wire yields one: its all-ones pattern is always reachable
/// (compare-exchange never changes it) and leaves the top wire at 0.
fn unsorted_output(arena: &ClusterArena) -> Option<Pattern> {
    let n = arena.inputs();
    if arena.live_count() > 1 {
        return arena
            .live()
            .find(|c| !c.wires.contains(&(n - 1)))
            .map(Cluster::all_ones);
    }
    arena
        .live()
        .flat_map(|c| c.patterns.iter().copied())
        .find(|&p| !is_sorted_pattern(p, n))
}

/// Verify a comparator sequence without building a [`Network`](crate::Network).
///
/// The wire count is checked; pairs are trusted, so use
/// [`Network::new`](crate::Network::new) to validate them.
pub fn verify_pairs(
    inputs: usize,
    pairs: &[Pair],
    options: VerifyOptions,
) -> Result<VerificationReport, NetworkError> {
    Verifier::new(inputs, options).run(pairs)
}
