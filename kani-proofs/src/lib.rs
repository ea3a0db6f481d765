// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the sortnet pattern kernel.
//!
//! This standalone crate extracts the compare-exchange kernel and the
//! sortedness test and proves their correctness using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Sortedness test**: `is_sorted_pattern` accepts exactly the `N + 1`
//!    patterns with ones on the high wires only
//! 2. **Sorted outputs are fixed**: no ascending comparator changes them
//! 3. **Kernel equivalence**: the linear merge equals map-sort-dedup
//! 4. **No growth**: compare-exchange never lengthens a list

pub type Pattern = u64;

// ============================================================================
// KERNEL (copied from src/engine/patterns.rs, index-based for the checker)
// ============================================================================

pub fn all_wires_mask(inputs: usize) -> Pattern {
    if inputs >= 64 {
        Pattern::MAX
    } else {
        (1 << inputs) - 1
    }
}

pub fn is_sorted_pattern(pattern: Pattern, inputs: usize) -> bool {
    let zeros = !pattern & all_wires_mask(inputs);
    zeros & zeros.wrapping_add(1) == 0
}

/// Compare-exchange `(i, j)` over a strictly ascending list.
pub fn apply_compare_exchange(patterns: &[Pattern], i: usize, j: usize) -> Vec<Pattern> {
    let low: Pattern = 1 << i;
    let mask = low | (1 << j);

    let forced: Vec<Pattern> = patterns
        .iter()
        .filter(|&&w| w & mask == low)
        .map(|&w| w ^ mask)
        .collect();
    let kept: Vec<Pattern> = patterns.iter().copied().filter(|&w| w & mask != low).collect();

    let mut out = Vec::with_capacity(patterns.len());
    let (mut a, mut b) = (0, 0);
    while a < forced.len() && b < kept.len() {
        if forced[a] < kept[b] {
            out.push(forced[a]);
            a += 1;
        } else if forced[a] > kept[b] {
            out.push(kept[b]);
            b += 1;
        } else {
            out.push(forced[a]);
            a += 1;
            b += 1;
        }
    }
    out.extend_from_slice(&forced[a..]);
    out.extend_from_slice(&kept[b..]);
    out
}

/// Naive reference: map every pattern, then sort and dedup.
pub fn naive_compare_exchange(patterns: &[Pattern], i: usize, j: usize) -> Vec<Pattern> {
    let low: Pattern = 1 << i;
    let mask = low | (1 << j);
    let mut out: Vec<Pattern> = patterns
        .iter()
        .map(|&w| if w & mask == low { w ^ mask } else { w })
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    const WIRES: usize = 6;

    /// A pattern is sorted iff it is `all & !mask(z)` for some zero count z.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_sorted_pattern_characterization() {
        let inputs: usize = kani::any_where(|&n| n >= 1 && n <= WIRES);
        let pattern: Pattern = kani::any_where(|&p: &Pattern| p <= all_wires_mask(inputs));

        let all = all_wires_mask(inputs);
        let mut is_canonical = false;
        for zeros in 0..=inputs {
            if pattern == all & !all_wires_mask(zeros) {
                is_canonical = true;
            }
        }
        kani::assert(
            is_sorted_pattern(pattern, inputs) == is_canonical,
            "sortedness test must match the canonical form",
        );
    }

    /// Ascending comparators leave sorted outputs unchanged.
    #[kani::proof]
    fn verify_sorted_patterns_are_fixed() {
        let inputs: usize = kani::any_where(|&n| n >= 2 && n <= WIRES);
        let i: usize = kani::any_where(|&i| i < inputs);
        let j: usize = kani::any_where(|&j| j < inputs && j > i);
        let pattern: Pattern = kani::any_where(|&p: &Pattern| p <= all_wires_mask(inputs));
        kani::assume(is_sorted_pattern(pattern, inputs));

        let low: Pattern = 1 << i;
        let mask = low | (1 << j);
        kani::assert(pattern & mask != low, "a sorted pattern is never forced");
    }

    /// The linear merge agrees with the naive kernel on 3-element lists.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_kernel_matches_naive() {
        let i: usize = kani::any_where(|&i| i < WIRES);
        let j: usize = kani::any_where(|&j| j < WIRES && j > i);

        let a: Pattern = kani::any_where(|&p: &Pattern| p <= all_wires_mask(WIRES));
        let b: Pattern = kani::any_where(|&p: &Pattern| p > a && p <= all_wires_mask(WIRES));
        let c: Pattern = kani::any_where(|&p: &Pattern| p > b && p <= all_wires_mask(WIRES));
        let patterns = [a, b, c];

        let fast = apply_compare_exchange(&patterns, i, j);
        let slow = naive_compare_exchange(&patterns, i, j);
        kani::assert(fast == slow, "kernel must match map-sort-dedup");
        kani::assert(fast.len() <= patterns.len(), "compare-exchange never grows a list");
    }
}
