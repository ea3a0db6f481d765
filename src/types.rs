// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a comparator network.
//!
//! A network is nothing more than a wire count and an ordered list of
//! compare-exchange pairs. Everything else (layers, clusters, pattern lists)
//! is derived from those two values.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Pair**: `i < j < n`. After the operation the value on wire `i` is not
//!   larger than the value on wire `j`. A descending pair would move a sorted
//!   input out of order, and the `N + 1` count would no longer mean "sorts".
//!
//! - **Pattern**: bit `k` set means wire `k` carries a 1. Wires are limited to
//!   [`MAX_INPUTS`] so a pattern always fits a `u64`.
//!
//! - **Layer**: no wire appears twice within one layer.

use serde::{Deserialize, Serialize};

/// A compare-exchange operation `(i, j)`: afterwards `wire[i] <= wire[j]`.
pub type Pair = (usize, usize);

/// Operations that can be viewed as applied simultaneously.
pub type Layer = Vec<Pair>;

/// One binary assignment of the wires, as a bitmask.
pub type Pattern = u64;

/// Largest supported network: one bit per wire in a [`Pattern`].
pub const MAX_INPUTS: usize = Pattern::BITS as usize;

/// Bit for a single wire.
#[inline]
pub fn bit(wire: usize) -> Pattern {
    1 << wire
}

/// Mask with the lowest `inputs` bits set.
#[inline]
pub fn all_wires_mask(inputs: usize) -> Pattern {
    if inputs >= MAX_INPUTS {
        Pattern::MAX
    } else {
        bit(inputs) - 1
    }
}

// =============================================================================
// SERIALIZED FORM
// =============================================================================

/// Network description as read from or written to JSON.
///
/// Either a flat comparator list or a layered one; `inputs` may be omitted and
/// is then inferred from the largest wire index.
///
/// ```json
/// {"inputs": 4, "pairs": [[0,1],[2,3],[0,2],[1,3],[1,2]]}
/// {"inputs": 4, "layers": [[[0,1],[2,3]],[[0,2],[1,3]],[[1,2]]]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<usize>,
    #[serde(flatten)]
    pub body: NetworkBody,
}

/// Comparators of a [`NetworkFile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkBody {
    Pairs(Vec<Pair>),
    Layers(Vec<Layer>),
}

impl NetworkBody {
    /// Flatten to the linear comparator order.
    pub fn into_pairs(self) -> Vec<Pair> {
        match self {
            NetworkBody::Pairs(pairs) => pairs,
            NetworkBody::Layers(layers) => crate::layers::layers_to_linear(&layers),
        }
    }
}
