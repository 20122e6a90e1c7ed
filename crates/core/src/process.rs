// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process identity, template, and the live process record.

use crate::event::Event;
use serde_json::Value;
use std::collections::BTreeSet;

crate::define_id! {
    /// Unique identifier for a process instance.
    ///
    /// Server-assigned unless the caller supplies one via
    /// [`ProcessTemplate::id`] (e.g. when starting a child process with a
    /// deterministic, caller-chosen id).
    pub struct ProcessId("proc");
}

/// What a caller supplies to start a process: either a fresh top-level
/// process (`start_process`) or a child process named by a
/// `StartChildProcess` decision.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessTemplate {
    /// Caller-chosen id. If absent, the backend assigns a fresh [`ProcessId`].
    pub id: Option<ProcessId>,
    pub workflow: String,
    pub input: Value,
    pub tags: BTreeSet<String>,
}

impl ProcessTemplate {
    pub fn new(workflow: impl Into<String>) -> Self {
        Self { id: None, workflow: workflow.into(), input: Value::Null, tags: BTreeSet::new() }
    }

    crate::setters! {
        option {
            id: ProcessId,
        }
        set {
            input: Value,
            tags: BTreeSet<String>,
        }
    }
}

/// A live process: its identity, the workflow it is an instance of, and
/// its append-only event history.
///
/// Exists in the process store iff it is live (not completed, not
/// cancelled) — §3 invariant I1/I7. Callers only ever observe snapshots;
/// the backend exclusively owns the record.
#[derive(Debug, Clone, PartialEq)]
pub struct Process {
    pub id: ProcessId,
    pub workflow: String,
    pub input: Value,
    pub tags: BTreeSet<String>,
    pub parent: Option<ProcessId>,
    pub history: Vec<Event>,
}

impl Process {
    pub fn new(id: ProcessId, template: &ProcessTemplate, parent: Option<ProcessId>) -> Self {
        Self {
            id,
            workflow: template.workflow.clone(),
            input: template.input.clone(),
            tags: template.tags.clone(),
            parent,
            history: vec![Event::ProcessStarted],
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
