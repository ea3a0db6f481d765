// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A comparator network and the questions you can ask about it.
//!
//! `Network` validates its wires once at construction and never changes its
//! operation list afterwards. The only mutable state is the cached verdict,
//! written by [`Network::verify`] and nothing else.

use crate::config::VerifyOptions;
use crate::engine::{VerificationReport, Verifier};
use crate::error::{NetworkError, OperationFault};
use crate::layers::{layers_to_linear, layers_to_string, linear_to_layers, remove_prefix};
use crate::types::{Layer, Pair};
use std::fmt;

/// A sequence of ascending compare-exchange operations over `inputs` wires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    inputs: usize,
    pairs: Vec<Pair>,
    verified: Option<bool>,
}

impl Network {
    /// Build a network, rejecting bad sizes and bad wire references.
    pub fn new(inputs: usize, pairs: impl Into<Vec<Pair>>) -> Result<Self, NetworkError> {
        NetworkError::check_size(inputs)?;

        let pairs = pairs.into();
        for (index, &(i, j)) in pairs.iter().enumerate() {
            let fault = if i >= inputs || j >= inputs {
                Some(OperationFault::OutOfRange)
            } else if i == j {
                Some(OperationFault::SameWire)
            } else if i > j {
                Some(OperationFault::Descending)
            } else {
                None
            };
            if let Some(fault) = fault {
                return Err(NetworkError::InvalidOperation {
                    index,
                    pair: (i, j),
                    inputs,
                    fault,
                });
            }
        }

        Ok(Self {
            inputs,
            pairs,
            verified: None,
        })
    }

    /// Build a network from its layered form.
    pub fn from_layers(inputs: usize, layers: &[Layer]) -> Result<Self, NetworkError> {
        Self::new(inputs, layers_to_linear(layers))
    }

    pub fn inputs(&self) -> usize {
        self.inputs
    }

    /// Operations in construction order.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Owned copy of the operations in construction order.
    pub fn operations(&self) -> Vec<Pair> {
        self.pairs.clone()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of layers in the greedy parallel schedule.
    pub fn depth(&self) -> usize {
        self.to_layers().len()
    }

    /// Check whether the network sorts every input.
    ///
    /// Always re-runs the engine and refreshes the cached verdict. `verbose`
    /// only turns on progress events.
    pub fn verify(&mut self, verbose: bool) -> Result<bool, NetworkError> {
        let options = VerifyOptions {
            verbose,
            budget: None,
        };
        self.verify_with(options).map(|report| report.valid)
    }

    /// Like [`verify`](Self::verify) but with explicit options and the full report.
    ///
    /// A failed run clears the cached verdict.
    pub fn verify_with(&mut self, options: VerifyOptions) -> Result<VerificationReport, NetworkError> {
        self.verified = None;
        let report = Verifier::new(self.inputs, options).run(&self.pairs)?;
        self.verified = Some(report.valid);
        Ok(report)
    }

    /// Verdict of the last successful [`verify`](Self::verify), if any.
    pub fn verify_status(&self) -> Option<bool> {
        self.verified
    }

    pub fn to_layers(&self) -> Vec<Layer> {
        linear_to_layers(&self.pairs)
    }

    /// True if every layer is closed under the mirror `(i, j) ↦ (N-1-j, N-1-i)`.
    ///
    /// Always false for an odd number of inputs.
    pub fn is_symmetric(&self) -> bool {
        if self.inputs % 2 == 1 {
            return false;
        }
        let n = self.inputs;
        self.to_layers().iter().all(|layer| {
            layer
                .iter()
                .all(|&(i, j)| layer.binary_search(&(n - 1 - j, n - 1 - i)).is_ok())
        })
    }

    /// The network without its first `prefix.len()` operations.
    pub fn remove_prefix(&self, prefix: &[Pair]) -> Result<Network, NetworkError> {
        Network::new(self.inputs, remove_prefix(&self.pairs, prefix)?)
    }

    /// Layered listing with verdict and symmetry notes.
    pub fn summary(&self) -> String {
        let layers = self.to_layers();
        let mut out = format!(
            "Network with {} inputs, {} CE's and {} layers.\n\n{}\n",
            self.inputs,
            self.pairs.len(),
            layers.len(),
            layers_to_string(&layers)
        );
        if self.verified == Some(true) {
            out.push_str("Verified as valid sorting network.\n");
        }
        if self.is_symmetric() {
            out.push_str("Network is symmetric.\n");
        }
        out
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Network of {} inputs, {} elements {:?}",
            self.inputs,
            self.pairs.len(),
            self.pairs
        )
    }
}
