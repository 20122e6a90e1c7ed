// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tasks handed to polling workers/deciders.

use crate::activity::ActivityExecution;
use crate::process::{Process, ProcessId};

crate::define_id! {
    /// Short-lived identifier for one dispatch of a task.
    ///
    /// Used by `heartbeat_activity_task`/`complete_activity_task`/
    /// `complete_decision_task` to locate the running-table entry created
    /// by the matching poll. Shared between the activity and decision
    /// running tables — they are keyed independently, so collisions
    /// between the two tables are harmless.
    pub struct RunId("run-");
}

/// Returned by `poll_activity_task` on a hit.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityTask {
    pub execution: ActivityExecution,
    pub process_id: ProcessId,
    pub run_id: RunId,
}

/// Returned by `poll_decision_task` on a hit. Carries a full snapshot of
/// the owning process so the decider can inspect its history.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTask {
    pub process: Process,
    pub run_id: RunId,
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
