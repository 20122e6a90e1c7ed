// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decisions emitted by a decider on `complete_decision_task`.

use crate::process::ProcessTemplate;
use crate::timer::Timer;
use serde_json::Value;

/// One instruction from a decider, applied in order by the decision
/// interpreter (§4.7). Each is appended to history as `Event::DecisionEvent`
/// before its side effect runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Schedule an activity. `category` overrides the activity
    /// descriptor's default category when present.
    ScheduleActivity {
        activity_name: String,
        id: String,
        input: Value,
        category: Option<String>,
    },
    /// Cancel a previously scheduled or running activity by its
    /// caller-supplied id.
    CancelActivity { id: String },
    /// Start a child process owned by the current one.
    StartChildProcess { process: ProcessTemplate },
    /// Wake the decider again after `delay` has elapsed.
    Timer(Timer),
    /// Terminate the process successfully, notifying the parent if any.
    CompleteProcess { result: Value },
    /// Terminate the process as cancelled, notifying the parent if any.
    CancelProcess { details: Option<Value> },
}

#[cfg(test)]
#[path = "decision_tests.rs"]
mod tests;
