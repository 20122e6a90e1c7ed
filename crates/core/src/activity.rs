// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Activity execution records and their terminal outcomes.

use serde_json::Value;

/// One scheduled/running instance of an activity.
///
/// Created when a decision schedules it, destroyed when it is
/// completed, cancelled, or times out. `id` is the caller-supplied
/// activity-id (unique per owning process's history — §3 invariant I6),
/// not a server-generated [`crate::define_id!`] type: deciders mint it
/// themselves so they can reference it later in a `CancelActivity`
/// decision.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityExecution {
    pub activity_name: String,
    pub id: String,
    pub input: Value,
}

impl ActivityExecution {
    pub fn new(activity_name: impl Into<String>, id: impl Into<String>, input: Value) -> Self {
        Self { activity_name: activity_name.into(), id: id.into(), input }
    }
}

/// Terminal outcome of an activity, carried on `Event::ActivityEvent`.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityOutcome {
    Completed(Value),
    Canceled,
    TimedOut,
    Failed(String),
}

#[cfg(test)]
#[path = "activity_tests.rs"]
mod tests;
