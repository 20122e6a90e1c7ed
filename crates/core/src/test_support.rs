// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::process::ProcessTemplate;
use serde_json::json;

/// A minimal process template for a workflow named `wf`.
pub fn template(workflow: &str, input: &str) -> ProcessTemplate {
    ProcessTemplate::new(workflow).input(json!(input))
}

/// Proptest strategies for the operation-sequence invariant tests (§8 P1–P7).
pub mod strategies {
    use proptest::prelude::*;

    /// Arbitrary short ASCII identifier, usable as an activity-id or
    /// signal name in generated operation sequences.
    pub fn arb_name() -> impl Strategy<Value = String> {
        "[a-z]{3,8}"
    }
}

#[cfg(test)]
#[path = "test_support_tests.rs"]
mod tests;
