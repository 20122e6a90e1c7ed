// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::Value;
use wf_core::{Clock, FakeClock};

fn execution(id: &str) -> ActivityExecution {
    ActivityExecution::new("send_email", id, Value::Null)
}

#[test]
fn schedule_then_poll_round_trips() {
    let clock = FakeClock::new();
    let mut q = ActivityQueues::new();
    q.schedule(
        "default",
        ScheduledActivity {
            execution: execution("a1"),
            process_id: ProcessId::new(),
            expires_at: clock.now() + std::time::Duration::from_secs(60),
        },
    );
    let polled = q.poll("default", clock.now()).unwrap();
    assert_eq!(polled.execution.id, "a1");
    assert!(q.poll("default", clock.now()).is_none());
}

#[test]
fn poll_skips_expired_entries() {
    let clock = FakeClock::new();
    let mut q = ActivityQueues::new();
    q.schedule(
        "default",
        ScheduledActivity {
            execution: execution("expired"),
            process_id: ProcessId::new(),
            expires_at: clock.now(),
        },
    );
    q.schedule(
        "default",
        ScheduledActivity {
            execution: execution("fresh"),
            process_id: ProcessId::new(),
            expires_at: clock.now() + std::time::Duration::from_secs(60),
        },
    );
    clock.advance(std::time::Duration::from_secs(1));
    let polled = q.poll("default", clock.now()).unwrap();
    assert_eq!(polled.execution.id, "fresh");
}

#[test]
fn find_by_id_checks_running_before_scheduled() {
    let clock = FakeClock::new();
    let mut q = ActivityQueues::new();
    let pid = ProcessId::new();
    q.schedule(
        "default",
        ScheduledActivity {
            execution: execution("a1"),
            process_id: pid,
            expires_at: clock.now() + std::time::Duration::from_secs(60),
        },
    );
    assert!(q.find_by_id("a1").is_some());

    let entry = q.poll("default", clock.now()).unwrap();
    q.insert_running(
        RunId::new(),
        RunningActivity {
            execution: entry.execution,
            process_id: pid,
            expires_at: clock.now() + std::time::Duration::from_secs(60),
            heartbeat_expires_at: clock.now() + std::time::Duration::from_secs(60),
        },
    );
    assert!(q.find_by_id("a1").is_some());
    assert!(q.scheduled_is_empty("default"));
}

#[test]
fn cancel_by_id_removes_from_both_tables() {
    let clock = FakeClock::new();
    let mut q = ActivityQueues::new();
    q.schedule(
        "default",
        ScheduledActivity {
            execution: execution("a1"),
            process_id: ProcessId::new(),
            expires_at: clock.now() + std::time::Duration::from_secs(60),
        },
    );
    q.cancel_by_id("a1");
    assert!(q.find_by_id("a1").is_none());
}

#[test]
fn sweep_scheduled_expired_removes_only_past_deadline() {
    let clock = FakeClock::new();
    let mut q = ActivityQueues::new();
    q.schedule(
        "default",
        ScheduledActivity {
            execution: execution("expired"),
            process_id: ProcessId::new(),
            expires_at: clock.now(),
        },
    );
    q.schedule(
        "default",
        ScheduledActivity {
            execution: execution("fresh"),
            process_id: ProcessId::new(),
            expires_at: clock.now() + std::time::Duration::from_secs(60),
        },
    );
    clock.advance(std::time::Duration::from_secs(1));
    let expired = q.sweep_scheduled_expired(clock.now());
    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].execution.id, "expired");
    assert!(q.find_by_id("fresh").is_some());
}

#[test]
fn cancel_for_process_removes_scheduled_and_running_entries() {
    let clock = FakeClock::new();
    let mut q = ActivityQueues::new();
    let target = ProcessId::new();
    let other = ProcessId::new();
    q.schedule(
        "default",
        ScheduledActivity {
            execution: execution("scheduled-target"),
            process_id: target,
            expires_at: clock.now() + std::time::Duration::from_secs(60),
        },
    );
    q.schedule(
        "default",
        ScheduledActivity {
            execution: execution("scheduled-other"),
            process_id: other,
            expires_at: clock.now() + std::time::Duration::from_secs(60),
        },
    );
    let run_id = RunId::new();
    q.insert_running(
        run_id,
        RunningActivity {
            execution: execution("running-target"),
            process_id: target,
            expires_at: clock.now() + std::time::Duration::from_secs(60),
            heartbeat_expires_at: clock.now() + std::time::Duration::from_secs(60),
        },
    );

    q.cancel_for_process(target);

    assert!(q.find_by_id("scheduled-target").is_none());
    assert!(q.find_by_id("running-target").is_none());
    assert!(q.remove_running(run_id).is_none());
    assert!(q.find_by_id("scheduled-other").is_some());
}

#[test]
fn sweep_running_expired_checks_both_deadlines() {
    let clock = FakeClock::new();
    let mut q = ActivityQueues::new();
    let run_id = RunId::new();
    q.insert_running(
        run_id,
        RunningActivity {
            execution: execution("a1"),
            process_id: ProcessId::new(),
            expires_at: clock.now() + std::time::Duration::from_secs(60),
            heartbeat_expires_at: clock.now(),
        },
    );
    clock.advance(std::time::Duration::from_secs(1));
    let expired = q.sweep_running_expired(clock.now());
    assert_eq!(expired.len(), 1);
    assert!(q.remove_running(run_id).is_none());
}
