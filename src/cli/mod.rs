// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sortnet command-line interface.
//!
//! Three subcommands: `verify` to run the engine, `layers` to print the
//! parallel schedule, and `info` for a quick structural summary. Every
//! command reads a network file (JSON or a plain pair list, `-` for stdin).

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "sortnet",
    about = "Memory-bounded sorting network verifier",
    version
)]
pub struct Cli {
    /// Log progress events (same as RUST_LOG=info)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that a network sorts every input
    Verify {
        /// Network file (JSON or pair list), `-` for stdin
        file: String,

        /// Number of inputs (default: from the file, else largest wire + 1)
        #[arg(short = 'n', long)]
        inputs: Option<usize>,

        /// Maximum patterns a single cluster may hold
        #[arg(long, env = "SORTNET_MAX_PATTERNS")]
        max_patterns: Option<usize>,

        /// Print the verification report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the network as parallel layers
    Layers {
        /// Network file (JSON or pair list), `-` for stdin
        file: String,

        /// Number of inputs (default: from the file, else largest wire + 1)
        #[arg(short = 'n', long)]
        inputs: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = LayerFormat::Plain)]
        format: LayerFormat,
    },

    /// Summarize size, depth and symmetry of a network
    Info {
        /// Network file (JSON or pair list), `-` for stdin
        file: String,

        /// Number of inputs (default: from the file, else largest wire + 1)
        #[arg(short = 'n', long)]
        inputs: Option<usize>,

        /// Verify first so the summary carries the verdict
        #[arg(long)]
        verify: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayerFormat {
    /// One `[(i,j),...]` line per layer
    Plain,
    /// `result.add_layer(k, VariadicList(...))` lines
    Mojo,
    /// `{"inputs": N, "layers": [...]}`
    Json,
}
