// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linear ↔ layered views of a comparator network.
//!
//! Layering greedily places each operation in the earliest layer after the
//! last layer touching either of its wires. Operations sharing a wire keep
//! their relative order, so the layered network computes the same function
//! as the linear one. Within a layer operations are sorted by `(i, j)` for a
//! canonical listing.
//!
//! None of this validates wire indices. The engine never uses it; it exists
//! for display and symmetry analysis.

use crate::error::NetworkError;
use crate::types::{Layer, Pair};
use std::fmt::Write;

/// Pack a linear operation sequence into layers.
pub fn linear_to_layers(pairs: &[Pair]) -> Vec<Layer> {
    let mut layers: Vec<Layer> = Vec::new();
    // next free layer per wire, grown on demand since indices are unchecked
    let mut next_free: Vec<usize> = Vec::new();

    for &(i, j) in pairs {
        let needed = i.max(j) + 1;
        if next_free.len() < needed {
            next_free.resize(needed, 0);
        }

        let layer = next_free[i].max(next_free[j]);
        if layer == layers.len() {
            layers.push(Vec::new());
        }
        layers[layer].push((i, j));
        next_free[i] = layer + 1;
        next_free[j] = layer + 1;
    }

    for layer in &mut layers {
        layer.sort_unstable();
    }
    layers
}

/// Concatenate layers back into a linear sequence.
pub fn layers_to_linear(layers: &[Layer]) -> Vec<Pair> {
    layers.iter().flatten().copied().collect()
}

/// Number of layers the greedy packing needs.
pub fn depth(pairs: &[Pair]) -> usize {
    linear_to_layers(pairs).len()
}

/// One `[(i,j),(k,l)]` line per layer.
pub fn layers_to_string(layers: &[Layer]) -> String {
    let mut out = String::new();
    for layer in layers {
        out.push('[');
        push_pairs(&mut out, layer);
        out.push_str("]\n");
    }
    out
}

/// One `result.add_layer(k, VariadicList(...))` line per layer.
pub fn layers_to_string_mojo(layers: &[Layer]) -> String {
    let mut out = String::new();
    for (id, layer) in layers.iter().enumerate() {
        let _ = write!(out, "result.add_layer({}, VariadicList(", id);
        push_pairs(&mut out, layer);
        out.push_str("))\n");
    }
    out
}

fn push_pairs(out: &mut String, pairs: &[Pair]) {
    for (k, (i, j)) in pairs.iter().enumerate() {
        if k > 0 {
            out.push(',');
        }
        let _ = write!(out, "({},{})", i, j);
    }
}

/// Strip a known prefix from a network.
///
/// Fails if `net` does not begin with exactly the operations of `prefix`.
pub fn remove_prefix(net: &[Pair], prefix: &[Pair]) -> Result<Vec<Pair>, NetworkError> {
    for (position, &expected) in prefix.iter().enumerate() {
        let found = net.get(position).copied();
        if found != Some(expected) {
            return Err(NetworkError::PrefixMismatch {
                position,
                expected,
                found,
            });
        }
    }
    Ok(net[prefix.len()..].to_vec())
}
