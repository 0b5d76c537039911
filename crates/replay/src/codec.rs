// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session document load/save.
//!
//! The persisted format is stable for compatibility: a JSON object with a
//! metadata block (`name`, `created_at`, `use_delays`) and an ordered
//! `inputs` array, each entry holding `value`, `request_time`,
//! `response_time`, `delay_ms` (redundant, persisted for inspection) and
//! `description`. A file may also hold a top-level array of such objects;
//! a session is then picked by name. Timestamps are RFC 3339.

use crate::record::InputRecord;
use crate::routine::Routine;
use crate::session::SessionLog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors from loading or saving session documents. All load failures occur
/// before any prompt executes.
#[derive(Debug, Error)]
pub enum SessionCodecError {
    #[error("failed to read session document: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed session document: {0}")]
    Malformed(String),

    #[error("unparsable {field} timestamp '{value}' in session document")]
    BadTimestamp { field: &'static str, value: String },

    #[error("no session named '{0}' in document")]
    UnknownSession(String),
}

/// Session metadata persisted alongside the recorded inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionMeta {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub use_delays: bool,
}

/// Wire form of one recorded answer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputEntry {
    pub value: String,

    /// RFC 3339.
    pub request_time: String,

    /// RFC 3339; absent for a record that was never answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<String>,

    /// Derived from the timestamps; persisted redundantly for inspection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Wire form of a whole recorded session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionDocument {
    pub name: String,

    /// RFC 3339.
    pub created_at: String,

    pub use_delays: bool,

    pub inputs: Vec<InputEntry>,
}

impl SessionDocument {
    /// Parse and validate the metadata block.
    pub fn meta(&self) -> Result<SessionMeta, SessionCodecError> {
        Ok(SessionMeta {
            name: self.name.clone(),
            created_at: parse_rfc3339("created_at", &self.created_at)?,
            use_delays: self.use_delays,
        })
    }
}

fn parse_rfc3339(field: &'static str, value: &str) -> Result<DateTime<Utc>, SessionCodecError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| SessionCodecError::BadTimestamp {
            field,
            value: value.to_string(),
        })
}

/// Parse a document string holding either one session object or an array of
/// them. Required fields that are absent fail as [`SessionCodecError::Malformed`].
pub fn parse_session_documents(content: &str) -> Result<Vec<SessionDocument>, SessionCodecError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| SessionCodecError::Malformed(e.to_string()))?;
    let docs = if value.is_array() {
        serde_json::from_value(value).map_err(|e| SessionCodecError::Malformed(e.to_string()))?
    } else {
        let doc: SessionDocument = serde_json::from_value(value)
            .map_err(|e| SessionCodecError::Malformed(e.to_string()))?;
        vec![doc]
    };
    Ok(docs)
}

/// Load every session document in a file.
pub fn load_session_documents(path: &Path) -> Result<Vec<SessionDocument>, SessionCodecError> {
    let content = std::fs::read_to_string(path)?;
    parse_session_documents(&content)
}

/// Load a routine from a session document file, ready to be dequeued in
/// document order. `name` picks a session when the file holds several;
/// without it the first session is used.
pub fn load_routine(path: &Path, name: Option<&str>) -> Result<Routine, SessionCodecError> {
    let docs = load_session_documents(path)?;
    let doc = match name {
        Some(wanted) => docs
            .iter()
            .find(|d| d.name == wanted)
            .ok_or_else(|| SessionCodecError::UnknownSession(wanted.to_string()))?,
        None => docs
            .first()
            .ok_or_else(|| SessionCodecError::Malformed("document holds no sessions".to_string()))?,
    };
    routine_from_document(doc)
}

/// Build a routine from one parsed document, validating every timestamp.
pub fn routine_from_document(doc: &SessionDocument) -> Result<Routine, SessionCodecError> {
    // Validate metadata up front so a bad created_at fails even when the
    // inputs themselves are fine.
    doc.meta()?;

    let mut routine = Routine::new();
    routine.set_use_delays(doc.use_delays);
    for entry in &doc.inputs {
        let request_time = parse_rfc3339("request_time", &entry.request_time)?;
        let response_time = entry
            .response_time
            .as_deref()
            .map(|raw| parse_rfc3339("response_time", raw))
            .transpose()?;
        routine.push(
            InputRecord::from_parts(
                entry.value.clone(),
                request_time,
                response_time,
                entry.description.clone(),
            ),
        );
    }
    Ok(routine)
}

/// Flatten a live session log into its wire form, chronological order.
pub fn session_document(log: &SessionLog, meta: &SessionMeta) -> SessionDocument {
    let inputs = log
        .chronological()
        .iter()
        .map(|record| InputEntry {
            value: record.value().to_string(),
            request_time: record.request_time().to_rfc3339(),
            response_time: record.response_time().map(|t| t.to_rfc3339()),
            delay_ms: record
                .delay()
                .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
            description: record.description().to_string(),
        })
        .collect();
    SessionDocument {
        name: meta.name.clone(),
        created_at: meta.created_at.to_rfc3339(),
        use_delays: meta.use_delays,
        inputs,
    }
}

/// Serialize a session log to a writer as a pretty-printed document.
pub fn write_session<W: Write>(
    writer: &mut W,
    log: &SessionLog,
    meta: &SessionMeta,
) -> Result<(), SessionCodecError> {
    let doc = session_document(log, meta);
    let json = serde_json::to_string_pretty(&doc)
        .map_err(|e| SessionCodecError::Malformed(e.to_string()))?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

/// Save a session log to a file. The produced document loads back with no
/// information loss.
pub fn save_session(
    path: &Path,
    log: &SessionLog,
    meta: &SessionMeta,
) -> Result<(), SessionCodecError> {
    let mut file = std::fs::File::create(path)?;
    write_session(&mut file, log, meta)
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
