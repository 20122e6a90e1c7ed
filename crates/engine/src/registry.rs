// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workflow and activity type registration.

use std::collections::HashMap;
use wf_core::{ActivityDescriptor, WorkflowDescriptor};

/// Holds the descriptors registered via `register_workflow`/`register_activity`.
///
/// Registration is append-only in practice — workflows and activities are
/// registered once at startup, before any process is started.
#[derive(Debug, Default)]
pub struct Registry {
    workflows: HashMap<String, WorkflowDescriptor>,
    activities: HashMap<String, ActivityDescriptor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_workflow(&mut self, descriptor: WorkflowDescriptor) {
        tracing::debug!(workflow = %descriptor.name, category = %descriptor.category, "registered workflow");
        self.workflows.insert(descriptor.name.clone(), descriptor);
    }

    pub fn register_activity(&mut self, descriptor: ActivityDescriptor) {
        tracing::debug!(activity = %descriptor.name, category = %descriptor.category, "registered activity");
        self.activities.insert(descriptor.name.clone(), descriptor);
    }

    pub fn workflow(&self, name: &str) -> Option<&WorkflowDescriptor> {
        self.workflows.get(name)
    }

    pub fn activity(&self, name: &str) -> Option<&ActivityDescriptor> {
        self.activities.get(name)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
