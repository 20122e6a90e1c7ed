// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timeout sweeping: scheduled-but-never-polled and running-but-never
//! completed activities and decisions are reclaimed here, run before every
//! poll and completion call (§4.6).

use crate::backend::Backend;
use wf_core::{ActivityOutcome, Clock, Event};

impl<C: Clock> Backend<C> {
    /// Times out activities that expired before a worker ever polled them,
    /// and activities a worker is holding past its execution or heartbeat
    /// deadline. Each timeout appends `ActivityEvent(.., TimedOut)` to the
    /// owning process's history and wakes its decider.
    ///
    /// A process cancelled while one of its activities was still
    /// outstanding is simply skipped here — there is no live process left
    /// to record history against or wake.
    pub(crate) fn time_out_activities(&mut self) {
        let now = self.clock.now();

        for expired in self.activity_queues.sweep_scheduled_expired(now) {
            tracing::debug!(activity = %expired.execution.activity_name, "activity scheduling timed out");
            if let Ok(process) = self.processes.get_mut(expired.process_id) {
                process.history.push(Event::ActivityEvent(expired.execution, ActivityOutcome::TimedOut));
            }
            self.schedule_decision(expired.process_id, None, None);
        }

        for expired in self.activity_queues.sweep_running_expired(now) {
            tracing::debug!(activity = %expired.execution.activity_name, "activity execution timed out");
            if let Ok(process) = self.processes.get_mut(expired.process_id) {
                process.history.push(Event::ActivityEvent(expired.execution, ActivityOutcome::TimedOut));
            }
            self.schedule_decision(expired.process_id, None, None);
        }
    }

    /// Times out decisions a decider is holding past its deadline, and
    /// decisions that sat unpolled in their queue past their own deadline.
    /// Both cases simply redeliver: a fresh decision task is rescheduled
    /// for the same process.
    pub(crate) fn time_out_decisions(&mut self) {
        let now = self.clock.now();

        for expired in self.decision_queues.sweep_scheduled_expired(now) {
            tracing::debug!(process_id = %expired.process_id, "scheduled decision timed out");
            self.schedule_decision(expired.process_id, None, None);
        }

        for expired in self.decision_queues.sweep_running_expired(now) {
            tracing::debug!(process_id = %expired.process_id, "decision task timed out");
            self.schedule_decision(expired.process_id, None, None);
        }
    }
}

#[cfg(test)]
#[path = "sweep_tests.rs"]
mod tests;
