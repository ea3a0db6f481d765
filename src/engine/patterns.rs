// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pattern-list kernels.
//!
//! A pattern list is a strictly increasing `Vec<u64>`. Both kernels here keep
//! that shape: the cross product re-sorts once, and the compare-exchange
//! kernel is a single two-pointer merge that never sorts at all.

use crate::contracts::check_patterns_sorted;
use crate::types::{all_wires_mask, bit, Pattern};
use std::cmp::Ordering;

/// Every pattern of `a` OR-ed with every pattern of `b`, sorted ascending.
///
/// The inputs must cover disjoint wire sets, which makes every combination
/// distinct; no deduplication is needed.
pub fn cross_product(a: &[Pattern], b: &[Pattern]) -> Vec<Pattern> {
    let mut merged = Vec::with_capacity(a.len() * b.len());
    for &p in a {
        merged.extend(b.iter().map(|&q| p | q));
    }
    merged.sort_unstable();
    check_patterns_sorted(&merged);
    merged
}

/// Apply compare-exchange `(i, j)` to a sorted pattern list.
///
/// Patterns with bit `i` set and bit `j` clear are "forced": the 1 moves from
/// wire `i` to wire `j`. Flipping the same two bits of every forced pattern
/// preserves their relative order, so forced and passthrough patterns are two
/// sorted runs that merge in one linear pass. Equal heads collapse to one
/// entry.
pub fn apply_compare_exchange(patterns: &[Pattern], i: usize, j: usize) -> Vec<Pattern> {
    check_patterns_sorted(patterns);

    let low = bit(i);
    let mask = low | bit(j);
    let is_forced = move |w: Pattern| w & mask == low;

    let mut forced = patterns
        .iter()
        .copied()
        .filter(move |&w| is_forced(w))
        .map(move |w| w ^ mask)
        .peekable();
    let mut kept = patterns
        .iter()
        .copied()
        .filter(move |&w| !is_forced(w))
        .peekable();

    let mut out = Vec::with_capacity(patterns.len());
    loop {
        let heads = (forced.peek().copied(), kept.peek().copied());
        match heads {
            (Some(a), Some(b)) => match a.cmp(&b) {
                Ordering::Less => {
                    out.push(a);
                    forced.next();
                }
                Ordering::Greater => {
                    out.push(b);
                    kept.next();
                }
                Ordering::Equal => {
                    out.push(a);
                    forced.next();
                    kept.next();
                }
            },
            (Some(_), None) => {
                out.extend(forced);
                break;
            }
            (None, Some(_)) => {
                out.extend(kept);
                break;
            }
            (None, None) => break,
        }
    }

    check_patterns_sorted(&out);
    out
}

/// True if `pattern` is a sorted output over `inputs` wires: all zeros on the
/// low wires, all ones on the high wires.
#[inline]
pub fn is_sorted_pattern(pattern: Pattern, inputs: usize) -> bool {
    let zeros = !pattern & all_wires_mask(inputs);
    zeros & zeros.wrapping_add(1) == 0
}

/// The `inputs + 1` sorted patterns, ascending.
pub fn sorted_patterns(inputs: usize) -> Vec<Pattern> {
    let all = all_wires_mask(inputs);
    let mut patterns: Vec<Pattern> = (0..=inputs)
        .map(|zeros| all & !all_wires_mask(zeros))
        .collect();
    patterns.sort_unstable();
    patterns
}
