// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Everything that can go wrong between reading a network and a verdict.
//!
//! Construction errors (`InvalidSize`, `InvalidOperation`) are fatal for the
//! network being built. `VerifierResourceExceeded` is the one recoverable
//! failure: raise the pattern budget and verify again from scratch. None of
//! these are logged by the library; they go straight back to the caller.

use crate::types::{Pair, MAX_INPUTS};
use std::fmt;

/// Why an operation is not acceptable for a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationFault {
    /// One of the wires is `>= inputs`.
    OutOfRange,
    /// Both ends of the pair are the same wire.
    SameWire,
    /// `i > j`: the minimum would land on the higher wire.
    Descending,
}

/// Error type for network construction, verification and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Wire count is zero or does not fit a pattern word.
    InvalidSize { inputs: usize, max: usize },
    /// Operation `index` references a wire it may not.
    InvalidOperation {
        index: usize,
        pair: Pair,
        inputs: usize,
        fault: OperationFault,
    },
    /// Merging two clusters would produce more patterns than the budget allows.
    VerifierResourceExceeded {
        wires: Pair,
        cluster_sizes: (usize, usize),
        pattern_counts: (usize, usize),
        product: u128,
        budget: usize,
    },
    /// Network does not start with the requested prefix.
    PrefixMismatch {
        position: usize,
        expected: Pair,
        found: Option<Pair>,
    },
    /// Network text could not be read.
    Parse { line: usize, message: String },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::InvalidSize { inputs, max } => {
                write!(
                    f,
                    "network size {} is invalid: must be a positive integer no larger than {}",
                    inputs, max
                )
            }
            NetworkError::InvalidOperation {
                index,
                pair,
                inputs,
                fault,
            } => match fault {
                OperationFault::OutOfRange => write!(
                    f,
                    "operation {} ({}, {}) references a wire outside [0, {})",
                    index, pair.0, pair.1, inputs
                ),
                OperationFault::SameWire => write!(
                    f,
                    "operation {} ({}, {}) compares a wire with itself",
                    index, pair.0, pair.1
                ),
                OperationFault::Descending => write!(
                    f,
                    "operation {} ({}, {}) is descending; pairs must be written (low, high)",
                    index, pair.0, pair.1
                ),
            },
            NetworkError::VerifierResourceExceeded {
                wires,
                cluster_sizes,
                pattern_counts,
                product,
                budget,
            } => {
                write!(
                    f,
                    "merging clusters of wires {} ({} wires, {} patterns) and {} ({} wires, {} patterns) \
                     needs {} patterns, exceeding the budget of {}; raise it with set_pattern_budget \
                     or --max-patterns",
                    wires.0,
                    cluster_sizes.0,
                    pattern_counts.0,
                    wires.1,
                    cluster_sizes.1,
                    pattern_counts.1,
                    product,
                    budget
                )
            }
            NetworkError::PrefixMismatch {
                position,
                expected,
                found,
            } => match found {
                Some(found) => write!(
                    f,
                    "prefix mismatch at position {}: expected ({}, {}), found ({}, {})",
                    position, expected.0, expected.1, found.0, found.1
                ),
                None => write!(
                    f,
                    "prefix mismatch at position {}: expected ({}, {}), network ended",
                    position, expected.0, expected.1
                ),
            },
            NetworkError::Parse { line, message } => {
                write!(f, "line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for NetworkError {}

impl NetworkError {
    /// True for errors that a larger pattern budget would avoid.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, NetworkError::VerifierResourceExceeded { .. })
    }

    /// Reject a wire count that a pattern cannot hold.
    pub(crate) fn check_size(inputs: usize) -> Result<(), NetworkError> {
        if inputs == 0 || inputs > MAX_INPUTS {
            return Err(NetworkError::InvalidSize {
                inputs,
                max: MAX_INPUTS,
            });
        }
        Ok(())
    }
}
