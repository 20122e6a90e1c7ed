// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::process::ProcessId;
use serde_json::json;

#[test]
fn process_started_is_distinct_from_decision_started() {
    assert_ne!(Event::ProcessStarted, Event::DecisionStarted);
}

#[test]
fn child_process_event_carries_result() {
    let event = Event::ChildProcessEvent {
        child_id: ProcessId::new(),
        workflow: "wf".to_string(),
        tags: BTreeSet::new(),
        result: ChildResult::ProcessCompleted(json!("ok")),
    };
    match event {
        Event::ChildProcessEvent { result: ChildResult::ProcessCompleted(v), .. } => {
            assert_eq!(v, json!("ok"));
        }
        _ => panic!("expected ChildProcessEvent"),
    }
}
