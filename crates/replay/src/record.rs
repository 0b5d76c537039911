// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A single recorded or live answer with its timing metadata.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Snapshot of one option shown by the most recent prompt render.
///
/// Attached to answers after the fact so a saved session is self-documenting:
/// a numeric answer can be read back alongside the option text it selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisteredOption {
    /// Message of the prompt that displayed this option.
    pub prompt_message: String,
    /// Option label as displayed.
    pub text: String,
    /// 0-based position; displayed 1-based.
    pub index: usize,
}

impl RegisteredOption {
    /// 1-based index as the user types it.
    pub fn displayed_index(&self) -> String {
        (self.index + 1).to_string()
    }
}

/// One answer: its text, when the prompt started waiting, when the answer
/// arrived, and an optional free-text annotation.
///
/// A record is created unanswered when a prompt begins waiting and answered
/// exactly once; after that only the registry back-reference may change.
#[derive(Clone, Debug)]
pub struct InputRecord {
    value: String,
    request_time: DateTime<Utc>,
    response_time: Option<DateTime<Utc>>,
    description: String,
    resolved_option: Option<RegisteredOption>,
}

impl InputRecord {
    /// Fresh unanswered record; `request_time` is when the prompt began waiting.
    pub fn requested_at(request_time: DateTime<Utc>) -> Self {
        Self {
            value: String::new(),
            request_time,
            response_time: None,
            description: String::new(),
            resolved_option: None,
        }
    }

    /// Already-answered record with zero delay, for building scripts
    /// programmatically.
    pub fn scripted(value: impl Into<String>, at: DateTime<Utc>) -> Self {
        let mut record = Self::requested_at(at);
        record.answer(value, at);
        record
    }

    /// Reconstruct a record from persisted parts.
    pub fn from_parts(
        value: impl Into<String>,
        request_time: DateTime<Utc>,
        response_time: Option<DateTime<Utc>>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            request_time,
            response_time,
            description: description.into(),
            resolved_option: None,
        }
    }

    /// Set the answer text, stamping `response_time`. A record is answered
    /// exactly once; later calls are ignored.
    pub fn answer(&mut self, value: impl Into<String>, response_time: DateTime<Utc>) {
        if self.response_time.is_some() {
            return;
        }
        self.value = value.into();
        self.response_time = Some(response_time);
    }

    pub fn is_answered(&self) -> bool {
        self.response_time.is_some()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn request_time(&self) -> DateTime<Utc> {
        self.request_time
    }

    pub fn response_time(&self) -> Option<DateTime<Utc>> {
        self.response_time
    }

    /// How long the answer took; `None` until answered. A clock that moved
    /// backwards between request and response clamps to zero.
    pub fn delay(&self) -> Option<Duration> {
        self.response_time
            .map(|response| (response - self.request_time).to_std().unwrap_or_default())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Builder form of [`set_description`](Self::set_description).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn resolved_option(&self) -> Option<&RegisteredOption> {
        self.resolved_option.as_ref()
    }

    /// Attach (or clear) the registry entry this answer selected. The only
    /// mutation allowed after a record is answered.
    pub fn set_resolved_option(&mut self, option: Option<RegisteredOption>) {
        self.resolved_option = option;
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
