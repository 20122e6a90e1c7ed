// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The table of live (running) processes.
//!
//! A process leaves this table the moment it completes or is canceled —
//! there is no archive of finished processes, matching the source backend's
//! `running_processes` dict.

use std::collections::HashMap;
use wf_core::{BackendError, Process, ProcessId};

#[derive(Debug, Default)]
pub struct ProcessStore {
    processes: HashMap<ProcessId, Process>,
}

impl ProcessStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, process: Process) {
        self.processes.insert(process.id, process);
    }

    pub fn get(&self, id: ProcessId) -> Result<&Process, BackendError> {
        self.processes.get(&id).ok_or(BackendError::UnknownProcess(id))
    }

    pub fn get_mut(&mut self, id: ProcessId) -> Result<&mut Process, BackendError> {
        self.processes.get_mut(&id).ok_or(BackendError::UnknownProcess(id))
    }

    pub fn remove(&mut self, id: ProcessId) -> Option<Process> {
        self.processes.remove(&id)
    }

    pub fn contains(&self, id: ProcessId) -> bool {
        self.processes.contains_key(&id)
    }

    /// Direct children of `parent`, in no particular order.
    pub fn children_of(&self, parent: ProcessId) -> Vec<ProcessId> {
        self.processes
            .values()
            .filter(|p| p.parent == Some(parent))
            .map(|p| p.id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.values()
    }
}

#[cfg(test)]
#[path = "process_store_tests.rs"]
mod tests;
