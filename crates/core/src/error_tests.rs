// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::process::ProcessId;
use crate::task::RunId;

#[test]
fn unknown_process_message_includes_id() {
    let id = ProcessId::new();
    let err = BackendError::UnknownProcess(id);
    assert!(err.to_string().contains(id.as_str()));
}

#[test]
fn unknown_activity_message_includes_run_id() {
    let id = RunId::new();
    let err = BackendError::UnknownActivity(id);
    assert!(err.to_string().contains(id.as_str()));
}

#[test]
fn timed_out_has_stable_message() {
    assert_eq!(BackendError::TimedOut.to_string(), "operation timed out");
}
