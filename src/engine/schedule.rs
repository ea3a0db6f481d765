// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pending-operation worklist with the ready-first reordering heuristic.
//!
//! After a merge, operations whose wires already share a cluster can be
//! applied without growing anything, and applying them early shrinks pattern
//! lists before the next merge multiplies them. `promote_ready` moves those
//! operations forward, but only when no earlier pending operation touches
//! either of their wires. Per-wire order is therefore never changed.

use crate::types::Pair;
use std::collections::VecDeque;

/// Operations still to be applied, in scheduling order.
#[derive(Debug, Clone, Default)]
pub struct Worklist {
    pending: VecDeque<Pair>,
}

impl Worklist {
    pub fn new(pairs: &[Pair]) -> Self {
        Self {
            pending: pairs.iter().copied().collect(),
        }
    }

    pub fn front(&self) -> Option<Pair> {
        self.pending.front().copied()
    }

    pub fn pop_front(&mut self) -> Option<Pair> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Reorder everything behind the front operation into
    /// `ready ++ deferred`, both in original relative order.
    ///
    /// An operation is ready when `same_cluster` holds for its wires and no
    /// operation before it in this pass (the front one included) used either
    /// wire. The front operation stays in place. Returns how many operations
    /// were classified ready.
    pub fn promote_ready<F>(&mut self, inputs: usize, same_cluster: F) -> usize
    where
        F: Fn(usize, usize) -> bool,
    {
        let Some(head) = self.pending.pop_front() else {
            return 0;
        };

        let mut touched = vec![false; inputs];
        touched[head.0] = true;
        touched[head.1] = true;

        let mut ready = Vec::with_capacity(self.pending.len());
        let mut deferred = Vec::with_capacity(self.pending.len());
        for (p, q) in self.pending.drain(..) {
            if !touched[p] && !touched[q] && same_cluster(p, q) {
                ready.push((p, q));
            } else {
                deferred.push((p, q));
            }
            touched[p] = true;
            touched[q] = true;
        }

        let promoted = ready.len();
        self.pending.push_back(head);
        self.pending.extend(ready);
        self.pending.extend(deferred);
        promoted
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.pending.iter()
    }
}
