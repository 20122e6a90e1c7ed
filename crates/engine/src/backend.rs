// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `Backend` struct: process lifecycle entry points (`start_process`,
//! `signal_process`, `cancel_process`, `process_by_id`, `processes`).
//! Polling and completion live in [`crate::dispatch`] and
//! [`crate::decisions`]; timeout sweeping lives in [`crate::sweep`].

use crate::activity_queue::ActivityQueues;
use crate::decision_queue::{DecisionQueues, ScheduledDecision};
use crate::process_store::ProcessStore;
use crate::registry::Registry;
use std::time::Instant;
use wf_core::{
    ActivityDescriptor, BackendError, Clock, Defaults, Process, ProcessId, ProcessTemplate,
    Signal, SystemClock, Timer, WorkflowDescriptor,
};

/// The in-memory workflow backend.
///
/// Generic over [`Clock`] so tests can drive timeouts deterministically
/// with `FakeClock`; production code uses the default [`SystemClock`].
pub struct Backend<C: Clock = SystemClock> {
    pub(crate) registry: Registry,
    pub(crate) processes: ProcessStore,
    pub(crate) activity_queues: ActivityQueues,
    pub(crate) decision_queues: DecisionQueues,
    pub(crate) defaults: Defaults,
    pub(crate) clock: C,
}

impl Backend<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock::default())
    }
}

impl Default for Backend<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Backend<C> {
    pub fn with_clock(clock: C) -> Self {
        let defaults = Defaults::default();
        let mut decision_queues = DecisionQueues::new();
        decision_queues.ensure_category(&defaults.decision_category);
        let mut activity_queues = ActivityQueues::new();
        activity_queues.ensure_category(&defaults.activity_category);

        Self {
            registry: Registry::new(),
            processes: ProcessStore::new(),
            activity_queues,
            decision_queues,
            defaults,
            clock,
        }
    }

    pub fn with_defaults(clock: C, defaults: Defaults) -> Self {
        let mut backend = Self::with_clock(clock);
        backend.decision_queues.ensure_category(&defaults.decision_category);
        backend.activity_queues.ensure_category(&defaults.activity_category);
        backend.defaults = defaults;
        backend
    }

    pub fn register_workflow(&mut self, descriptor: WorkflowDescriptor) {
        self.decision_queues.ensure_category(&descriptor.category);
        self.registry.register_workflow(descriptor);
    }

    pub fn register_activity(&mut self, descriptor: ActivityDescriptor) {
        self.activity_queues.ensure_category(&descriptor.category);
        self.registry.register_activity(descriptor);
    }

    /// Starts a new top-level process and schedules its first decision task.
    pub fn start_process(&mut self, template: ProcessTemplate) -> ProcessId {
        let id = template.id.unwrap_or_default();
        let process = Process::new(id, &template, None);
        self.processes.insert(process);
        self.schedule_decision(id, None, None);
        id
    }

    /// Starts a process as the child of `parent`, used internally by the
    /// decision interpreter for `StartChildProcess`.
    pub(crate) fn start_child_process(&mut self, template: &ProcessTemplate, parent: ProcessId) -> ProcessId {
        let id = template.id.unwrap_or_default();
        let process = Process::new(id, template, Some(parent));
        self.processes.insert(process);
        self.schedule_decision(id, None, None);
        id
    }

    /// Appends `signal` to the process's history and schedules a decision
    /// task if one isn't already pending.
    pub fn signal_process(&mut self, process_id: ProcessId, signal: Signal) -> Result<(), BackendError> {
        let process = self.processes.get_mut(process_id)?;
        process.history.push(wf_core::Event::SignalEvent(signal));
        self.schedule_decision(process_id, None, None);
        Ok(())
    }

    /// Cancels a live process: appends the cancellation event, then removes
    /// it (and recursively its children) from the live process table.
    pub fn cancel_process(&mut self, process_id: ProcessId, details: Option<serde_json::Value>) -> Result<(), BackendError> {
        let process = self.processes.get_mut(process_id)?;
        process.history.push(wf_core::Event::DecisionEvent(wf_core::Decision::CancelProcess { details }));
        self.cancel_process_internal(process_id);
        Ok(())
    }

    pub fn process_by_id(&self, process_id: ProcessId) -> Result<Process, BackendError> {
        self.processes.get(process_id).map(|p| p.clone())
    }

    /// A snapshot of every live process, optionally filtered by workflow
    /// name and/or tag.
    pub fn processes(&self, workflow: Option<&str>, tag: Option<&str>) -> Vec<Process> {
        self.processes
            .iter()
            .filter(|p| workflow.map(|w| p.workflow == w).unwrap_or(true))
            .filter(|p| tag.map(|t| p.has_tag(t)).unwrap_or(true))
            .cloned()
            .collect()
    }

    /// Removes a process (and all descendants) from the live table and
    /// purges every queue entry referencing it — decisions and activities,
    /// scheduled and running alike (§3 invariant I7, §8 P4).
    pub(crate) fn cancel_process_internal(&mut self, process_id: ProcessId) {
        self.decision_queues.cancel_for_process(process_id);
        self.activity_queues.cancel_for_process(process_id);
        self.processes.remove(process_id);
        for child in self.processes.children_of(process_id) {
            self.cancel_process_internal(child);
        }
    }

    /// Enqueues a decision task for `process_id`, deduplicating against an
    /// already-eligible pending entry. `timer` carries a fired `Timer`
    /// decision's payload; it is echoed back as `Event::TimerEvent` when
    /// the decision is next polled.
    pub(crate) fn schedule_decision(&mut self, process_id: ProcessId, start: Option<Instant>, timer: Option<Timer>) {
        let Ok(process) = self.processes.get(process_id) else { return };
        let Some(descriptor) = self.registry.workflow(&process.workflow) else { return };
        let category = descriptor.category.clone();
        let now = self.clock.now();
        let expires_at = if timer.is_some() { None } else { Some(now + descriptor.decision_timeout) };
        self.decision_queues.schedule(
            &category,
            ScheduledDecision { process_id, start, expires_at, timer },
            now,
        );
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
