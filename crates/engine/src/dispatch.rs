// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Polling and single-task completion: `poll_activity_task`,
//! `poll_decision_task`, `heartbeat_activity_task`, `complete_activity_task`.
//! `complete_decision_task` lives in [`crate::decisions`] — it drives the
//! decision interpreter rather than a single state transition.

use crate::activity_queue::RunningActivity;
use crate::backend::Backend;
use crate::decision_queue::RunningDecision;
use wf_core::{
    ActivityOutcome, ActivityTask, BackendError, Clock, DecisionTask, Event, RunId,
};

impl<C: Clock> Backend<C> {
    /// Pops the next eligible activity from `category`, if any.
    ///
    /// Entries scanned past that have already expired are left queued for
    /// the periodic sweep to reclaim (with a `TimedOut` history event) —
    /// this call never dispatches one, but it doesn't erase the timeout
    /// either.
    pub fn poll_activity_task(&mut self, category: &str) -> Option<ActivityTask> {
        let now = self.clock.now();
        let entry = self.activity_queues.poll(category, now)?;

        let descriptor = self.registry.activity(&entry.execution.activity_name)?;
        let run_id = RunId::new();
        let running = RunningActivity {
            execution: entry.execution.clone(),
            process_id: entry.process_id,
            expires_at: now + descriptor.execution_timeout,
            heartbeat_expires_at: now + descriptor.heartbeat_timeout,
        };
        self.activity_queues.insert_running(run_id, running);

        if let Ok(process) = self.processes.get_mut(entry.process_id) {
            process.history.push(Event::ActivityStarted(entry.execution.clone()));
        }

        tracing::debug!(activity = %entry.execution.activity_name, run_id = %run_id, "dispatched activity task");
        Some(ActivityTask { execution: entry.execution, process_id: entry.process_id, run_id })
    }

    /// Sweeps timeouts, then pops the next eligible decision from
    /// `category`, if any. A fired `Timer` decision is echoed back as
    /// `Event::TimerEvent` before the task is dispatched.
    pub fn poll_decision_task(&mut self, category: &str) -> Option<DecisionTask> {
        self.time_out_activities();
        self.time_out_decisions();

        let now = self.clock.now();
        let entry = self.decision_queues.poll(category, now)?;

        if let Some(timer) = entry.timer {
            if let Ok(process) = self.processes.get_mut(entry.process_id) {
                process.history.push(Event::TimerEvent(timer));
            }
        }

        let process = self.processes.get(entry.process_id).ok()?;
        let workflow = self.registry.workflow(&process.workflow)?;
        let run_id = RunId::new();
        self.decision_queues.insert_running(
            run_id,
            RunningDecision { process_id: entry.process_id, expires_at: now + workflow.timeout },
        );

        let process = self.processes.get_mut(entry.process_id).ok()?;
        process.history.push(Event::DecisionStarted);
        let snapshot = process.clone();

        tracing::debug!(process_id = %entry.process_id, run_id = %run_id, "dispatched decision task");
        Some(DecisionTask { process: snapshot, run_id })
    }

    /// Renews an outstanding activity's heartbeat deadline. Sweeps
    /// timeouts first, so a heartbeat racing its own timeout correctly
    /// loses — the caller sees `UnknownActivity`.
    pub fn heartbeat_activity_task(&mut self, run_id: RunId) -> Result<(), BackendError> {
        self.time_out_activities();

        let now = self.clock.now();
        let activity_name = self
            .activity_queues
            .running_mut(run_id)
            .ok_or(BackendError::UnknownActivity(run_id))?
            .execution
            .activity_name
            .clone();
        let heartbeat_timeout = self
            .registry
            .activity(&activity_name)
            .map(|d| d.heartbeat_timeout)
            .unwrap_or(self.defaults.activity_heartbeat_timeout);

        let running = self.activity_queues.running_mut(run_id).ok_or(BackendError::UnknownActivity(run_id))?;
        running.heartbeat_expires_at = now + heartbeat_timeout;
        Ok(())
    }

    /// Completes an outstanding activity with a terminal outcome and wakes
    /// the owning process's decider.
    pub fn complete_activity_task(&mut self, run_id: RunId, outcome: ActivityOutcome) -> Result<(), BackendError> {
        self.time_out_activities();

        let running = self.activity_queues.remove_running(run_id).ok_or(BackendError::UnknownActivity(run_id))?;
        if let Ok(process) = self.processes.get_mut(running.process_id) {
            process.history.push(Event::ActivityEvent(running.execution, outcome));
        }
        self.schedule_decision(running.process_id, None, None);
        Ok(())
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
