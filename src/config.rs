// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Process-wide verifier configuration.
//!
//! The pattern budget caps the size of any single cluster's pattern list.
//! It is read once at the start of each verification run, so changing it
//! never affects a run that is already in progress.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default ceiling on patterns in one merged cluster (~800 MB of `u64`s).
pub const DEFAULT_PATTERN_BUDGET: usize = 100_000_000;

static PATTERN_BUDGET: AtomicUsize = AtomicUsize::new(DEFAULT_PATTERN_BUDGET);

/// Set the pattern budget used by subsequent verification runs.
pub fn set_pattern_budget(patterns: usize) {
    PATTERN_BUDGET.store(patterns, Ordering::Relaxed);
}

/// Current process-wide pattern budget.
pub fn pattern_budget() -> usize {
    PATTERN_BUDGET.load(Ordering::Relaxed)
}

/// Options for a single verification run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Emit `info`-level progress events while verifying.
    pub verbose: bool,
    /// Per-run budget; `None` uses [`pattern_budget`].
    pub budget: Option<usize>,
}

impl VerifyOptions {
    pub fn verbose() -> Self {
        Self {
            verbose: true,
            budget: None,
        }
    }

    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Budget this run should enforce.
    pub fn effective_budget(&self) -> usize {
        self.budget.unwrap_or_else(pattern_budget)
    }
}
