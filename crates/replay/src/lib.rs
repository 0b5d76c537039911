// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input recording and session replay for console menus.
//!
//! This crate holds the data layer of the menuline toolkit: every answer a
//! prompt receives is captured as an [`InputRecord`], a pre-scripted run is a
//! [`Routine`] of such records, the answers actually given during a run pile
//! up in a [`SessionLog`], and the codec turns a log into a stable JSON
//! session document (and back into a routine) so an interactive run can be
//! replayed bit-for-bit.

mod codec;
mod record;
mod routine;
mod session;

pub use codec::{
    load_routine, load_session_documents, parse_session_documents, routine_from_document,
    save_session, session_document, write_session, InputEntry, SessionCodecError, SessionDocument,
    SessionMeta,
};
pub use record::{InputRecord, RegisteredOption};
pub use routine::{Routine, RoutineError};
pub use session::SessionLog;
