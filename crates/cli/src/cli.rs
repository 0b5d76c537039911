// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing for the demo binary.

use chrono::{DateTime, Utc};
use clap::Parser;
use menuline_replay::{load_routine, Routine, SessionCodecError};
use std::path::PathBuf;
use thiserror::Error;

/// Interactive console-menu demo with record/replay
#[derive(Parser, Debug)]
#[command(
    name = "menuline",
    version,
    about = "Interactive console-menu demo with record/replay"
)]
pub struct Cli {
    /// Replay answers from a recorded session file instead of the terminal
    #[arg(long, value_name = "PATH", conflicts_with = "builtin")]
    pub replay: Option<PathBuf>,

    /// Named session to pick when the replay file holds several
    #[arg(long, value_name = "NAME", requires = "replay")]
    pub session: Option<String>,

    /// Replay a built-in script ('walkthrough' or 'bail')
    #[arg(long, value_name = "NAME")]
    pub builtin: Option<String>,

    /// Save the recorded session to this file on exit
    #[arg(long, value_name = "PATH")]
    pub record: Option<PathBuf>,

    /// Replay instantly, ignoring recorded timing
    #[arg(long)]
    pub no_delays: bool,

    /// Do not append answers to the session log
    #[arg(long)]
    pub no_record: bool,

    /// Clear the display before each menu render
    #[arg(long)]
    pub clear_screen: bool,

    /// Name stored in the saved session document
    #[arg(long, value_name = "NAME", default_value = "menuline session")]
    pub session_name: String,
}

/// Errors turning flags into a runnable setup.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    Codec(#[from] SessionCodecError),

    #[error("unknown builtin script '{0}' (available: walkthrough, bail)")]
    UnknownBuiltin(String),
}

impl Cli {
    /// Build the scripted routine the flags ask for, if any. `--no-delays`
    /// overrides whatever the source recorded.
    pub fn routine(&self, now: DateTime<Utc>) -> Result<Option<Routine>, LaunchError> {
        let mut routine = match (&self.replay, &self.builtin) {
            (Some(path), _) => load_routine(path, self.session.as_deref())?,
            (None, Some(name)) => builtin_routine(name, now)?,
            (None, None) => return Ok(None),
        };
        if self.no_delays {
            routine.set_use_delays(false);
        }
        Ok(Some(routine))
    }
}

/// Scripts shipped with the demo, replayable without a session file.
/// `walkthrough` drives every demo option before leaving; `bail` leaves at
/// the first prompt.
pub fn builtin_routine(name: &str, now: DateTime<Utc>) -> Result<Routine, LaunchError> {
    match name {
        "walkthrough" => Ok(Routine::scripted(
            ["1", "2", "2", "hello from the script", "exit"],
            now,
        )),
        "bail" => Ok(Routine::scripted(["exit"], now)),
        other => Err(LaunchError::UnknownBuiltin(other.to_string())),
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
