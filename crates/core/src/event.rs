// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! History event types.
//!
//! A process's history is an ordered, append-only log of [`Event`]s — §3
//! invariant I5. Nothing in this crate removes or reorders history once
//! appended.

use crate::activity::{ActivityExecution, ActivityOutcome};
use crate::decision::Decision;
use crate::process::ProcessId;
use crate::signal::Signal;
use crate::timer::Timer;
use serde_json::Value;
use std::collections::BTreeSet;

/// Outcome of a completed child process, carried on `Event::ChildProcessEvent`.
#[derive(Debug, Clone, PartialEq)]
pub enum ChildResult {
    ProcessCompleted(Value),
    ProcessCanceled(Option<Value>),
}

/// A single entry on a process's history.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Always the first event on every live process's history (§8 P1).
    ProcessStarted,
    /// A decision task was dispatched to a decider.
    DecisionStarted,
    /// One decision from a completed decision task, appended before its
    /// side effect is applied (§4.7).
    DecisionEvent(Decision),
    /// An activity task was dispatched to a worker.
    ActivityStarted(ActivityExecution),
    /// An activity reached a terminal outcome.
    ActivityEvent(ActivityExecution, ActivityOutcome),
    /// `signal_process` delivered a signal.
    SignalEvent(Signal),
    /// A `Timer` decision's wake-up fired. Appended at poll time, never
    /// at schedule time (§9 Design Notes — Timer semantics).
    TimerEvent(Timer),
    /// A child process reached a terminal outcome and the parent was
    /// notified.
    ChildProcessEvent {
        child_id: ProcessId,
        workflow: String,
        tags: BTreeSet<String>,
        result: ChildResult,
    },
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
