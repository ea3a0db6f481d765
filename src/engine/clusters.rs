// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wire clusters and their pattern lists.
//!
//! Clusters live in an arena indexed by slot id. Each wire maps to the slot
//! that owns it. Merging moves the absorbed cluster's wires into the survivor
//! and clears the absorbed slot in place, so slot ids stay stable for the
//! whole run.
//!
//! **Invariant**: the live clusters partition `0..inputs`, and every pattern
//! of a cluster only has bits on that cluster's wires.

use super::patterns::{apply_compare_exchange, cross_product};
use crate::contracts::check_cluster_partition;
use crate::error::NetworkError;
use crate::types::{bit, Pattern};

/// A set of mutually dependent wires with their reachable patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cluster {
    pub wires: Vec<usize>,
    pub patterns: Vec<Pattern>,
}

impl Cluster {
    fn singleton(wire: usize) -> Self {
        Self {
            wires: vec![wire],
            patterns: vec![0, bit(wire)],
        }
    }

    /// Absorbed clusters keep their slot but own nothing.
    pub fn is_live(&self) -> bool {
        !self.wires.is_empty()
    }

    /// Pattern with every wire of this cluster set.
    pub fn all_ones(&self) -> Pattern {
        self.wires.iter().fold(0, |acc, &w| acc | bit(w))
    }
}

/// What a merge did, for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    pub survivor: usize,
    pub absorbed: usize,
    pub patterns: usize,
}

/// Union-find style wire → cluster map over an arena of clusters.
#[derive(Debug, Clone)]
pub struct ClusterArena {
    slots: Vec<Cluster>,
    owner: Vec<usize>,
}

impl ClusterArena {
    /// One singleton cluster `{0, 2^k}` per wire `k`.
    pub fn singletons(inputs: usize) -> Self {
        Self {
            slots: (0..inputs).map(Cluster::singleton).collect(),
            owner: (0..inputs).collect(),
        }
    }

    pub fn inputs(&self) -> usize {
        self.owner.len()
    }

    #[inline]
    pub fn cluster_of(&self, wire: usize) -> usize {
        self.owner[wire]
    }

    #[inline]
    pub fn same_cluster(&self, a: usize, b: usize) -> bool {
        self.owner[a] == self.owner[b]
    }

    /// Cluster currently owning `wire`.
    pub fn cluster_for(&self, wire: usize) -> &Cluster {
        &self.slots[self.owner[wire]]
    }

    /// Clusters that have not been absorbed.
    pub fn live(&self) -> impl Iterator<Item = &Cluster> {
        self.slots.iter().filter(|c| c.is_live())
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    /// Product of the live clusters' pattern counts, saturating.
    pub fn total_patterns(&self) -> u128 {
        self.live()
            .fold(1u128, |acc, c| acc.saturating_mul(c.patterns.len() as u128))
    }

    /// Merge the clusters owning wires `i` and `j`.
    ///
    /// The budget is checked before anything is touched; a failed merge
    /// leaves the arena unchanged. The cluster with more wires survives.
    pub fn merge(&mut self, i: usize, j: usize, budget: usize) -> Result<MergeOutcome, NetworkError> {
        let (ci, cj) = (self.owner[i], self.owner[j]);
        debug_assert_ne!(ci, cj, "merge called on wires {} and {} of one cluster", i, j);

        let (len_i, len_j) = (self.slots[ci].patterns.len(), self.slots[cj].patterns.len());
        let product = len_i as u128 * len_j as u128;
        if product > budget as u128 {
            return Err(NetworkError::VerifierResourceExceeded {
                wires: (i, j),
                cluster_sizes: (self.slots[ci].wires.len(), self.slots[cj].wires.len()),
                pattern_counts: (len_i, len_j),
                product,
                budget,
            });
        }

        let (survivor, absorbed) = if self.slots[cj].wires.len() > self.slots[ci].wires.len() {
            (cj, ci)
        } else {
            (ci, cj)
        };

        let taken = std::mem::take(&mut self.slots[absorbed]);
        let merged = cross_product(&self.slots[survivor].patterns, &taken.patterns);
        for &wire in &taken.wires {
            self.owner[wire] = survivor;
        }

        let target = &mut self.slots[survivor];
        target.patterns = merged;
        target.wires.extend(taken.wires);

        check_cluster_partition(self);

        Ok(MergeOutcome {
            survivor,
            absorbed,
            patterns: self.slots[survivor].patterns.len(),
        })
    }

    /// Apply compare-exchange `(i, j)` inside their common cluster.
    ///
    /// Returns the number of patterns left in that cluster.
    pub fn apply(&mut self, i: usize, j: usize) -> usize {
        debug_assert!(self.same_cluster(i, j), "apply across clusters ({}, {})", i, j);
        let slot = &mut self.slots[self.owner[i]];
        slot.patterns = apply_compare_exchange(&slot.patterns, i, j);
        slot.patterns.len()
    }

    pub(crate) fn owners(&self) -> &[usize] {
        &self.owner
    }

    pub(crate) fn slots(&self) -> &[Cluster] {
        &self.slots
    }
}
