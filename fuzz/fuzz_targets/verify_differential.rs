// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target comparing the clustered engine with brute force.
//!
//! Small wire counts keep the exhaustive oracle cheap, so every network the
//! fuzzer finds gets a ground-truth verdict.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sortnet::testing::{reachable_outputs, sorts_all_binary_inputs};
use sortnet::{is_sorted_pattern, Network, Pair, VerifyOptions};

#[derive(Debug, Clone)]
struct NetworkInput {
    inputs: usize,
    pairs: Vec<Pair>,
}

impl<'a> arbitrary::Arbitrary<'a> for NetworkInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let inputs = u.int_in_range(2..=10)?;
        let len = u.int_in_range(0..=48)?;
        let mut pairs = Vec::with_capacity(len);
        for _ in 0..len {
            let a = u.int_in_range(0..=inputs - 1)?;
            let b = u.int_in_range(0..=inputs - 2)?;
            // skip over `a` so the two wires differ
            let b = if b >= a { b + 1 } else { b };
            pairs.push((a.min(b), a.max(b)));
        }
        Ok(Self { inputs, pairs })
    }
}

fuzz_target!(|input: NetworkInput| {
    let NetworkInput { inputs, pairs } = input;
    let mut net = Network::new(inputs, pairs.clone()).expect("generated pairs are in range");

    let report = net
        .verify_with(VerifyOptions::default().with_budget(1 << 20))
        .expect("10 wires never exceed 2^20 patterns");

    // Property 1: same verdict as the 0/1-principle checked exhaustively
    assert_eq!(
        report.valid,
        sorts_all_binary_inputs(inputs, &pairs),
        "verdict mismatch for {:?}",
        pairs
    );

    // Property 2: a sorter ends with exactly N + 1 patterns, never fewer
    assert!(report.final_patterns > inputs as u128);

    // Property 3: the witness is a real unsorted output
    if let Some(witness) = report.unsorted_output {
        assert!(!is_sorted_pattern(witness, inputs));
        assert!(reachable_outputs(inputs, &pairs).contains(&witness));
    }
});
