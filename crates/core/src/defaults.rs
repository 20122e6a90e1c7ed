// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default categories and timeouts, overridable per registration.

use std::time::Duration;

/// Bundle of defaults a [`crate::descriptor::WorkflowDescriptor`] or
/// [`crate::descriptor::ActivityDescriptor`] falls back to when a
/// registration call omits an override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub decision_category: String,
    pub activity_category: String,
    pub workflow_timeout: Duration,
    pub decision_timeout: Duration,
    pub activity_scheduled_timeout: Duration,
    pub activity_execution_timeout: Duration,
    pub activity_heartbeat_timeout: Duration,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            decision_category: "default".to_string(),
            activity_category: "default".to_string(),
            workflow_timeout: Duration::from_secs(60),
            decision_timeout: Duration::from_secs(60),
            activity_scheduled_timeout: Duration::from_secs(60),
            activity_execution_timeout: Duration::from_secs(60),
            activity_heartbeat_timeout: Duration::from_secs(60),
        }
    }
}

// Test-only builder for tweaking individual timeouts without repeating
// every field of `Defaults`.
crate::builder! {
    pub struct DefaultsBuilder => Defaults {
        into {
            decision_category: String = "default",
            activity_category: String = "default",
        }
        set {
            workflow_timeout: Duration = Duration::from_secs(60),
            decision_timeout: Duration = Duration::from_secs(60),
            activity_scheduled_timeout: Duration = Duration::from_secs(60),
            activity_execution_timeout: Duration = Duration::from_secs(60),
            activity_heartbeat_timeout: Duration = Duration::from_secs(60),
        }
    }
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;
