// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::time::Duration;
use wf_core::{Clock, FakeClock};

fn plain(process_id: ProcessId, expires_at: Instant) -> ScheduledDecision {
    ScheduledDecision { process_id, start: None, expires_at: Some(expires_at), timer: None }
}

#[test]
fn schedule_then_poll_round_trips() {
    let clock = FakeClock::new();
    let mut q = DecisionQueues::new();
    let pid = ProcessId::new();
    q.schedule("default", plain(pid, clock.now() + Duration::from_secs(60)), clock.now());
    let polled = q.poll("default", clock.now()).unwrap();
    assert_eq!(polled.process_id, pid);
}

#[test]
fn duplicate_schedule_for_same_process_is_a_no_op() {
    let clock = FakeClock::new();
    let mut q = DecisionQueues::new();
    let pid = ProcessId::new();
    q.schedule("default", plain(pid, clock.now() + Duration::from_secs(60)), clock.now());
    q.schedule("default", plain(pid, clock.now() + Duration::from_secs(60)), clock.now());
    q.poll("default", clock.now()).unwrap();
    assert!(q.poll("default", clock.now()).is_none());
}

#[test]
fn timer_entries_are_never_deduplicated() {
    let clock = FakeClock::new();
    let mut q = DecisionQueues::new();
    let pid = ProcessId::new();
    let future = clock.now() + Duration::from_secs(5);
    let timer_entry = ScheduledDecision {
        process_id: pid,
        start: Some(future),
        expires_at: None,
        timer: Some(Timer::new(Duration::from_secs(5))),
    };
    q.schedule("default", timer_entry.clone(), clock.now());
    q.schedule("default", timer_entry, clock.now());

    clock.advance(Duration::from_secs(10));
    assert!(q.poll("default", clock.now()).is_some());
    assert!(q.poll("default", clock.now()).is_some());
}

#[test]
fn poll_skips_future_start_entries() {
    let clock = FakeClock::new();
    let mut q = DecisionQueues::new();
    let pid = ProcessId::new();
    let future = clock.now() + Duration::from_secs(30);
    q.schedule(
        "default",
        ScheduledDecision { process_id: pid, start: Some(future), expires_at: None, timer: None },
        clock.now(),
    );
    assert!(q.poll("default", clock.now()).is_none());
}

#[test]
fn cancel_for_process_removes_pending_entries() {
    let clock = FakeClock::new();
    let mut q = DecisionQueues::new();
    let pid = ProcessId::new();
    q.schedule("default", plain(pid, clock.now() + Duration::from_secs(60)), clock.now());
    q.cancel_for_process(pid);
    assert!(q.poll("default", clock.now()).is_none());
}

#[test]
fn sweep_running_expired_only_removes_past_deadline() {
    let clock = FakeClock::new();
    let mut q = DecisionQueues::new();
    let run_id = RunId::new();
    q.insert_running(run_id, RunningDecision { process_id: ProcessId::new(), expires_at: clock.now() });
    clock.advance(Duration::from_secs(1));
    let expired = q.sweep_running_expired(clock.now());
    assert_eq!(expired.len(), 1);
    assert!(q.remove_running(run_id).is_none());
}
