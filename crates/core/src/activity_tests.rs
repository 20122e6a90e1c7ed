// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[test]
fn new_sets_all_fields() {
    let e = ActivityExecution::new("act", "a1", json!("y"));
    assert_eq!(e.activity_name, "act");
    assert_eq!(e.id, "a1");
    assert_eq!(e.input, json!("y"));
}

#[test]
fn outcomes_are_distinguishable() {
    assert_ne!(ActivityOutcome::Completed(json!("z")), ActivityOutcome::Canceled);
    assert_ne!(ActivityOutcome::TimedOut, ActivityOutcome::Failed("x".into()));
}
