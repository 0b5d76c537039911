// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive console-menu toolkit with deterministic record/replay.
//!
//! Every prompt obtains its answer through a single dispatcher that either
//! consumes a pre-recorded script or blocks on the live terminal, recording
//! each answer with timing into a session log. A saved session replays the
//! whole interactive run bit-for-bit, which makes menu-driven tools
//! scriptable and their behavior testable without a terminal.

pub mod cancel;
pub mod cli;
pub mod colors;
pub mod context;
pub mod dispatch;
pub mod menu;
pub mod options;
pub mod output;
pub mod registry;
pub mod select;
pub mod testing;
pub mod time;

/// Re-exported record/replay types from the menuline-replay crate.
pub mod replay {
    pub use menuline_replay::{
        load_routine, load_session_documents, parse_session_documents, routine_from_document,
        save_session, session_document, write_session, InputEntry, InputRecord, RegisteredOption,
        Routine, RoutineError, SessionCodecError, SessionDocument, SessionLog, SessionMeta,
    };
}
