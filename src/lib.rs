//! Sorting-network verification with bounded memory.
//!
//! This crate decides whether a comparator network sorts every input, using
//! the 0/1-principle without ever holding all `2^N` binary inputs at once.
//! Wires start as independent clusters; a cluster's pattern list is only
//! combined with another when a comparator first links them, and every
//! compare-exchange prunes the list in linear time.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────────────┐
//! │  parse.rs   │────▶│  network.rs  │────▶│        engine/           │
//! │ (text/JSON) │     │  (Network,   │     │ clusters  (arena, merge) │
//! └─────────────┘     │  verify,     │     │ patterns  (CE kernel)    │
//!                     │  symmetry)   │     │ schedule  (worklist)     │
//!                     └──────────────┘     └──────────────────────────┘
//!                            │                          │
//!                            ▼                          ▼
//!                     ┌──────────────┐     ┌──────────────────────────┐
//!                     │  layers.rs   │     │      contracts.rs        │
//!                     │ (scheduling, │     │ (sorted lists, wire      │
//!                     │  rendering)  │     │  partition; debug only)  │
//!                     └──────────────┘     └──────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sortnet::Network;
//!
//! let mut net = Network::new(4, vec![(0, 1), (2, 3), (0, 2), (1, 3), (1, 2)])?;
//! assert!(net.verify(false)?);
//! assert_eq!(net.to_layers().len(), 3);
//! assert!(net.is_symmetric());
//! # Ok::<(), sortnet::NetworkError>(())
//! ```
//!
//! Large networks may need a bigger pattern budget:
//!
//! ```
//! sortnet::set_pattern_budget(500_000_000);
//! # sortnet::set_pattern_budget(sortnet::DEFAULT_PATTERN_BUDGET);
//! ```

// Module declarations
pub mod config;
pub mod contracts;
pub mod engine;
mod error;
pub mod layers;
mod network;
pub mod parse;
pub mod testing;
mod types;

// Re-exports for public API
pub use config::{pattern_budget, set_pattern_budget, VerifyOptions, DEFAULT_PATTERN_BUDGET};
pub use engine::{is_sorted_pattern, verify_pairs, VerificationReport, Verifier};
pub use error::{NetworkError, OperationFault};
pub use layers::{
    depth, layers_to_linear, layers_to_string, layers_to_string_mojo, linear_to_layers,
    remove_prefix,
};
pub use network::Network;
pub use parse::{parse_network, parse_pairs};
pub use types::{
    all_wires_mask, bit, Layer, NetworkBody, NetworkFile, Pair, Pattern, MAX_INPUTS,
};
