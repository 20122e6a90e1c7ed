// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn run_ids_are_unique() {
    assert_ne!(RunId::new(), RunId::new());
}

#[test]
fn run_id_has_prefix() {
    assert!(RunId::new().as_str().starts_with("run-"));
}
