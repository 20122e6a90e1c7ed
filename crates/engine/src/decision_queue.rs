// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-category decision scheduling: a time-sorted backlog of pending
//! decision tasks and a table of decisions currently out with a decider.

use std::collections::HashMap;
use std::time::Instant;
use wf_core::{ProcessId, RunId, Timer};

/// A decision waiting for a decider to poll it.
///
/// `start` is `None` for an ordinary decision (eligible as soon as it's
/// queued) and `Some(instant)` for one deferred to a future time — either a
/// fired [`Timer`] or a decision redelivered after its own timeout.
/// `expires_at` is `None` only for timer entries, which never time out
/// while queued (source backend parity).
#[derive(Debug, Clone)]
pub struct ScheduledDecision {
    pub process_id: ProcessId,
    pub start: Option<Instant>,
    pub expires_at: Option<Instant>,
    pub timer: Option<Timer>,
}

#[derive(Debug, Clone)]
pub struct RunningDecision {
    pub process_id: ProcessId,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct DecisionQueues {
    scheduled: HashMap<String, Vec<ScheduledDecision>>,
    running: HashMap<RunId, RunningDecision>,
}

impl DecisionQueues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ensure_category(&mut self, category: &str) {
        self.scheduled.entry(category.to_string()).or_default();
    }

    /// Enqueues a decision for `process_id`, unless an equivalent one is
    /// already pending.
    ///
    /// An existing entry for the same process blocks a duplicate insert
    /// only when that entry is already eligible (no `start`, or a `start`
    /// at or before this one) — matches the source backend's dedup check.
    /// A `Timer` decision is never deduplicated: every fired timer gets its
    /// own entry.
    pub fn schedule(&mut self, category: &str, entry: ScheduledDecision, now: Instant) {
        let queue = self.scheduled.entry(category.to_string()).or_default();
        if entry.timer.is_none() {
            let reference = entry.start.unwrap_or(now);
            let already_eligible = queue.iter().any(|existing| {
                existing.process_id == entry.process_id
                    && existing.start.map(|s| s <= reference).unwrap_or(true)
            });
            if already_eligible {
                return;
            }
        }
        queue.push(entry);
        queue.sort_by_key(|d| d.start);
    }

    pub fn cancel_for_process(&mut self, process_id: ProcessId) {
        for queue in self.scheduled.values_mut() {
            queue.retain(|d| d.process_id != process_id);
        }
    }

    pub fn insert_running(&mut self, run_id: RunId, entry: RunningDecision) {
        self.running.insert(run_id, entry);
    }

    pub fn remove_running(&mut self, run_id: RunId) -> Option<RunningDecision> {
        self.running.remove(&run_id)
    }

    /// Pops the first entry in `category` eligible to run: not deferred to
    /// the future, and (if it has a deadline) not yet expired. Entries
    /// deferred to the future are left in place, in source-backend order.
    pub fn poll(&mut self, category: &str, now: Instant) -> Option<ScheduledDecision> {
        let queue = self.scheduled.get_mut(category)?;
        let index = queue.iter().position(|d| match d.start {
            Some(start) if start > now => false,
            _ => match d.expires_at {
                Some(expires_at) => expires_at >= now,
                None => true,
            },
        })?;
        Some(queue.remove(index))
    }

    /// Removes and returns running entries whose deadline has passed.
    pub fn sweep_running_expired(&mut self, now: Instant) -> Vec<RunningDecision> {
        let expired_ids: Vec<RunId> = self
            .running
            .iter()
            .filter(|(_, d)| d.expires_at < now)
            .map(|(id, _)| *id)
            .collect();
        expired_ids.into_iter().filter_map(|id| self.running.remove(&id)).collect()
    }

    /// Removes and returns scheduled entries whose own deadline has passed
    /// (a decision that sat in its queue too long without being polled).
    pub fn sweep_scheduled_expired(&mut self, now: Instant) -> Vec<ScheduledDecision> {
        let mut expired = Vec::new();
        for queue in self.scheduled.values_mut() {
            let mut remaining = Vec::with_capacity(queue.len());
            for entry in queue.drain(..) {
                match entry.expires_at {
                    Some(expires_at) if expires_at < now => expired.push(entry),
                    _ => remaining.push(entry),
                }
            }
            *queue = remaining;
        }
        expired
    }
}

#[cfg(test)]
#[path = "decision_queue_tests.rs"]
mod tests;
