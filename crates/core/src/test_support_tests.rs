// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn template_carries_workflow_and_input() {
    let t = template("wf", "x");
    assert_eq!(t.workflow, "wf");
    assert_eq!(t.input, serde_json::json!("x"));
}
