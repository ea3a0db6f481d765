// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the compare-exchange kernel.
//!
//! The linear merge must agree with the naive map-sort-dedup on any sorted
//! pattern list, including lists with patterns already in exchanged form.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sortnet::engine::apply_compare_exchange;

fuzz_target!(|input: (Vec<u16>, u8, u8)| {
    let (raw, a, b) = input;
    let (i, j) = ((a % 16) as usize, (b % 16) as usize);
    if i == j {
        return;
    }
    let (i, j) = (i.min(j), i.max(j));

    let mut patterns: Vec<u64> = raw.into_iter().map(u64::from).collect();
    patterns.sort_unstable();
    patterns.dedup();

    let fast = apply_compare_exchange(&patterns, i, j);

    let mask = (1u64 << i) | (1u64 << j);
    let mut naive: Vec<u64> = patterns
        .iter()
        .map(|&p| if p & mask == 1 << i { p ^ mask } else { p })
        .collect();
    naive.sort_unstable();
    naive.dedup();

    assert_eq!(fast, naive, "kernel disagrees on ({}, {})", i, j);
});
