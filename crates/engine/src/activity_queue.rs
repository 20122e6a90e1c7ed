// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-category activity scheduling: a FIFO of not-yet-dispatched activities
//! and a table of activities currently out for execution.

use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use wf_core::{ActivityExecution, ProcessId, RunId};

/// An activity waiting in its category queue for a worker to poll it.
#[derive(Debug, Clone)]
pub struct ScheduledActivity {
    pub execution: ActivityExecution,
    pub process_id: ProcessId,
    pub expires_at: Instant,
}

/// An activity a worker currently holds, between poll and
/// complete/heartbeat/timeout.
#[derive(Debug, Clone)]
pub struct RunningActivity {
    pub execution: ActivityExecution,
    pub process_id: ProcessId,
    pub expires_at: Instant,
    pub heartbeat_expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct ActivityQueues {
    scheduled: HashMap<String, VecDeque<ScheduledActivity>>,
    running: HashMap<RunId, RunningActivity>,
}

impl ActivityQueues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ensure_category(&mut self, category: &str) {
        self.scheduled.entry(category.to_string()).or_default();
    }

    pub fn schedule(&mut self, category: &str, entry: ScheduledActivity) {
        self.scheduled.entry(category.to_string()).or_default().push_back(entry);
    }

    /// Finds a queued-or-running activity by its caller-supplied id.
    ///
    /// Running activities are searched first, then each scheduled category —
    /// an activity can only be in one place at a time, so the order only
    /// matters when both searches would otherwise be needed.
    pub fn find_by_id(&self, id: &str) -> Option<&ActivityExecution> {
        if let Some(running) = self.running.values().find(|a| a.execution.id == id) {
            return Some(&running.execution);
        }
        self.scheduled
            .values()
            .flat_map(|q| q.iter())
            .find(|a| a.execution.id == id)
            .map(|a| &a.execution)
    }

    /// Removes a queued-or-running activity by its caller-supplied id.
    pub fn cancel_by_id(&mut self, id: &str) {
        for queue in self.scheduled.values_mut() {
            queue.retain(|a| a.execution.id != id);
        }
        self.running.retain(|_, a| a.execution.id != id);
    }

    /// Removes every scheduled-or-running activity owned by `process_id`.
    ///
    /// Used when a process is cancelled outright (§3 invariant I7): unlike
    /// [`Self::cancel_by_id`], this has no corresponding history event —
    /// the owning process record is gone by the time this runs.
    pub fn cancel_for_process(&mut self, process_id: ProcessId) {
        for queue in self.scheduled.values_mut() {
            queue.retain(|a| a.process_id != process_id);
        }
        self.running.retain(|_, a| a.process_id != process_id);
    }

    pub fn insert_running(&mut self, run_id: RunId, entry: RunningActivity) {
        self.running.insert(run_id, entry);
    }

    pub fn running_mut(&mut self, run_id: RunId) -> Option<&mut RunningActivity> {
        self.running.get_mut(&run_id)
    }

    pub fn remove_running(&mut self, run_id: RunId) -> Option<RunningActivity> {
        self.running.remove(&run_id)
    }

    #[cfg(test)]
    pub fn scheduled_is_empty(&self, category: &str) -> bool {
        match self.scheduled.get(category) {
            Some(queue) => queue.is_empty(),
            None => true,
        }
    }

    /// Returns the first not-yet-expired entry in `category`, removing only
    /// that entry. Entries it scans past that have already expired are left
    /// in place rather than discarded here — they are reclaimed (with a
    /// `TimedOut` history event) by [`Self::sweep_scheduled_expired`], which
    /// runs on the next poll/completion that sweeps timeouts. Discarding
    /// them here instead would lose that history event entirely (§8 S2).
    pub fn poll(&mut self, category: &str, now: Instant) -> Option<ScheduledActivity> {
        let queue = self.scheduled.get_mut(category)?;
        let index = queue.iter().position(|entry| entry.expires_at >= now)?;
        queue.remove(index)
    }

    /// Removes and returns scheduled entries whose scheduling deadline has
    /// passed, across every category.
    pub fn sweep_scheduled_expired(&mut self, now: Instant) -> Vec<ScheduledActivity> {
        let mut expired = Vec::new();
        for queue in self.scheduled.values_mut() {
            let mut remaining = VecDeque::with_capacity(queue.len());
            while let Some(entry) = queue.pop_front() {
                if entry.expires_at < now {
                    expired.push(entry);
                } else {
                    remaining.push_back(entry);
                }
            }
            *queue = remaining;
        }
        expired
    }

    /// Removes and returns running entries whose execution or heartbeat
    /// deadline has passed.
    pub fn sweep_running_expired(&mut self, now: Instant) -> Vec<RunningActivity> {
        let expired_ids: Vec<RunId> = self
            .running
            .iter()
            .filter(|(_, a)| a.expires_at < now || a.heartbeat_expires_at < now)
            .map(|(id, _)| *id)
            .collect();
        expired_ids.into_iter().filter_map(|id| self.running.remove(&id)).collect()
    }
}

#[cfg(test)]
#[path = "activity_queue_tests.rs"]
mod tests;
