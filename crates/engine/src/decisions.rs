// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The decision interpreter: `complete_decision_task` and the per-variant
//! side effects it drives (§4.7).

use crate::activity_queue::ScheduledActivity;
use crate::backend::Backend;
use wf_core::{
    ActivityExecution, ActivityOutcome, BackendError, ChildResult, Clock, Decision, Event,
    ProcessId, RunId,
};

impl<C: Clock> Backend<C> {
    /// Applies every decision from a completed decision task, in order.
    ///
    /// Once a `CompleteProcess`/`CancelProcess` decision removes the
    /// process from the live table, any decision still left in the batch
    /// is a no-op — there is nothing left to apply it to.
    pub fn complete_decision_task(&mut self, run_id: RunId, decisions: Vec<Decision>) -> Result<(), BackendError> {
        self.time_out_decisions();

        let running = self.decision_queues.remove_running(run_id).ok_or(BackendError::UnknownDecision(run_id))?;
        let process_id = running.process_id;

        for decision in decisions {
            if !self.processes.contains(process_id) {
                break;
            }
            self.apply_decision(process_id, decision);
        }
        Ok(())
    }

    fn apply_decision(&mut self, process_id: ProcessId, decision: Decision) {
        let Ok(process) = self.processes.get_mut(process_id) else { return };
        process.history.push(Event::DecisionEvent(decision.clone()));

        match decision {
            Decision::ScheduleActivity { activity_name, id, input, category } => {
                self.schedule_activity(process_id, activity_name, id, input, category);
            }
            Decision::CancelActivity { id } => self.cancel_activity(process_id, &id),
            Decision::StartChildProcess { process: template } => {
                self.start_child_process(&template, process_id);
            }
            Decision::Timer(timer) => {
                let wake_at = self.clock.now() + timer.delay;
                self.schedule_decision(process_id, Some(wake_at), Some(timer));
            }
            Decision::CompleteProcess { result } => {
                self.complete_or_cancel_process(process_id, ChildResult::ProcessCompleted(result));
            }
            Decision::CancelProcess { details } => {
                self.complete_or_cancel_process(process_id, ChildResult::ProcessCanceled(details));
            }
        }
    }

    fn schedule_activity(
        &mut self,
        process_id: ProcessId,
        activity_name: String,
        id: String,
        input: serde_json::Value,
        category_override: Option<String>,
    ) {
        let Some(descriptor) = self.registry.activity(&activity_name) else {
            tracing::warn!(activity = %activity_name, "ScheduleActivity for unregistered activity, ignored");
            return;
        };
        let category = category_override.unwrap_or_else(|| descriptor.category.clone());
        let expires_at = self.clock.now() + descriptor.scheduled_timeout;
        let execution = ActivityExecution::new(activity_name, id, input);
        self.activity_queues.schedule(&category, ScheduledActivity { execution, process_id, expires_at });
    }

    fn cancel_activity(&mut self, process_id: ProcessId, id: &str) {
        let Some(execution) = self.activity_queues.find_by_id(id).cloned() else { return };
        self.activity_queues.cancel_by_id(id);
        if let Ok(process) = self.processes.get_mut(process_id) {
            process.history.push(Event::ActivityEvent(execution, ActivityOutcome::Canceled));
        }
    }

    fn complete_or_cancel_process(&mut self, process_id: ProcessId, result: ChildResult) {
        let Ok(process) = self.processes.get(process_id) else { return };
        let parent = process.parent;
        let workflow = process.workflow.clone();
        let tags = process.tags.clone();

        self.cancel_process_internal(process_id);

        if let Some(parent_id) = parent {
            if let Ok(parent_process) = self.processes.get_mut(parent_id) {
                parent_process.history.push(Event::ChildProcessEvent {
                    child_id: process_id,
                    workflow,
                    tags,
                    result,
                });
            }
            self.schedule_decision(parent_id, None, None);
        }
    }
}

#[cfg(test)]
#[path = "decisions_tests.rs"]
mod tests;
