// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy shared by every public `Backend` operation.

use crate::process::ProcessId;
use crate::task::RunId;

/// Errors surfaced synchronously to the caller of the operation that
/// triggered them. Internal races between a sweep timeout and a
/// completion call are swallowed as no-ops rather than raised here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// `process_by_id`/`signal_process`/`cancel_process` referenced a
    /// process-id that is not (or no longer) live.
    #[error("unknown process: {0}")]
    UnknownProcess(ProcessId),

    /// `complete_activity_task`/`heartbeat_activity_task` referenced a
    /// run-id that is stale, timed out, or was cancelled.
    #[error("unknown activity run: {0}")]
    UnknownActivity(RunId),

    /// `complete_decision_task` referenced a run-id that is stale or
    /// timed out.
    #[error("unknown decision run: {0}")]
    UnknownDecision(RunId),

    /// Reserved for a future synchronous timeout notification. The
    /// sweeper never raises this itself — it records timeouts as history
    /// events instead (see the `Backend` timeout sweep).
    #[error("operation timed out")]
    TimedOut,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
