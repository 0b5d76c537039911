// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only log of every answer actually given during a run.

use crate::record::InputRecord;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;

/// Session log for recording answers as they happen.
///
/// Created empty at the start of a run and never truncated mid-run. Records
/// enter in strict request order, single writer per prompt flow; the mutex
/// serializes access should multiple threads ever prompt. Cloning shares the
/// same underlying log.
pub struct SessionLog {
    created_at: DateTime<Utc>,
    records: Arc<Mutex<Vec<InputRecord>>>,
}

impl SessionLog {
    /// New empty log created now.
    pub fn new() -> Self {
        Self::new_at(Utc::now())
    }

    /// New empty log with a fixed creation time (for deterministic tests).
    pub fn new_at(created_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Append one answer.
    pub fn record(&self, record: InputRecord) {
        self.records.lock().push(record);
    }

    /// All records in chronological (request) order.
    pub fn chronological(&self) -> Vec<InputRecord> {
        self.records.lock().clone()
    }

    /// The most recently recorded answer, if any.
    pub fn most_recent(&self) -> Option<InputRecord> {
        self.records.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Default for SessionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SessionLog {
    fn clone(&self) -> Self {
        Self {
            created_at: self.created_at,
            records: Arc::clone(&self.records),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
