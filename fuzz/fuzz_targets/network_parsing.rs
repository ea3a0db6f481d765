// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for network readers.
//!
//! Arbitrary text must produce a network or an error, never a panic. Any
//! network that parses must render to layers that parse back to the same
//! operations.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sortnet::{layers_to_string, parse_network, parse_pairs};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(net) = parse_network(text, None) {
        let listing = layers_to_string(&net.to_layers());
        let reparsed = parse_pairs(&listing).expect("rendered layers always parse");

        let mut original = net.pairs().to_vec();
        let mut layered = reparsed;
        original.sort_unstable();
        layered.sort_unstable();
        assert_eq!(original, layered);
    }
});
