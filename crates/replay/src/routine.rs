// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! An ordered, consumable script of pre-recorded answers.

use crate::record::InputRecord;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use thiserror::Error;

/// Errors from consuming a routine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RoutineError {
    /// The script ran out of answers while the application kept prompting.
    /// A script must match the number of prompts the run issues; a mismatch
    /// is a script bug, not a condition to recover from.
    #[error("routine exhausted: no scripted input left")]
    BufferExhausted,
}

/// FIFO-consumable sequence of [`InputRecord`]s representing a pre-scripted
/// session, plus the flag controlling whether recorded delays are replayed.
#[derive(Clone, Debug, Default)]
pub struct Routine {
    inputs: VecDeque<InputRecord>,
    use_delays: bool,
}

impl Routine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routine over already-built records, in the order given.
    pub fn from_records(records: impl IntoIterator<Item = InputRecord>) -> Self {
        Self {
            inputs: records.into_iter().collect(),
            use_delays: false,
        }
    }

    /// Wrap raw answer strings as fresh zero-delay records requested `at` the
    /// given time, for building scripts programmatically.
    pub fn scripted<S: AsRef<str>>(
        values: impl IntoIterator<Item = S>,
        at: DateTime<Utc>,
    ) -> Self {
        Self::from_records(
            values
                .into_iter()
                .map(|value| InputRecord::scripted(value.as_ref(), at)),
        )
    }

    /// Builder form: replay recorded delays when consumed.
    pub fn with_delays(mut self) -> Self {
        self.use_delays = true;
        self
    }

    pub fn use_delays(&self) -> bool {
        self.use_delays
    }

    pub fn set_use_delays(&mut self, use_delays: bool) {
        self.use_delays = use_delays;
    }

    /// Append one record to the end of the script.
    pub fn push(&mut self, record: InputRecord) {
        self.inputs.push_back(record);
    }

    pub fn has_next(&self) -> bool {
        !self.inputs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Consume the next scripted answer. Consuming past the end is an error,
    /// never an empty or default value.
    pub fn dequeue(&mut self) -> Result<InputRecord, RoutineError> {
        self.inputs.pop_front().ok_or(RoutineError::BufferExhausted)
    }

    /// Look at the next scripted answer without consuming it.
    pub fn peek(&self) -> Result<&InputRecord, RoutineError> {
        self.inputs.front().ok_or(RoutineError::BufferExhausted)
    }
}

#[cfg(test)]
#[path = "routine_tests.rs"]
mod tests;
