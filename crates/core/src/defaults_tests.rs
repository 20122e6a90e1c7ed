// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn default_values_are_sane() {
    let d = Defaults::default();
    assert_eq!(d.decision_category, "default");
    assert_eq!(d.activity_category, "default");
    assert_eq!(d.workflow_timeout, Duration::from_secs(60));
}

#[test]
fn builder_overrides_only_touched_fields() {
    let d = Defaults::builder().activity_heartbeat_timeout(Duration::from_secs(5)).build();
    assert_eq!(d.activity_heartbeat_timeout, Duration::from_secs(5));
    assert_eq!(d.decision_category, Defaults::default().decision_category);
}
