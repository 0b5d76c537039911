// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The single chokepoint all prompts use to obtain an answer.
//!
//! A read pulls the next scripted entry when a routine is pending (optionally
//! replaying its recorded delay, scaled down), and otherwise blocks on the
//! terminal. The blocking path is cancellable: the blocking line read runs on
//! a worker and is raced against the caller's token. Every answer, live or
//! replayed, is appended to the session log while recording is enabled, so
//! the whole run can be serialized and replayed later.

use crate::cancel::CancelToken;
use crate::colors::{styled_description, styled_replay_value};
use crate::context::DispatcherContext;
use crate::time::Clock;
use menuline_replay::{InputRecord, RoutineError};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Upper bound on one replayed delay, so replay never blocks indefinitely
/// however long the original answer took.
pub const MAX_REPLAY_DELAY: Duration = Duration::from_secs(2);

/// Blocking line input. The seam that lets tests script terminal input
/// without a terminal.
pub trait LineReader: Send + Sync + 'static {
    /// Block until one line is available, without its trailing newline.
    /// `None` on end of input.
    fn read_line(&self) -> std::io::Result<Option<String>>;
}

/// Reader over process stdin.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdinReader;

impl LineReader for StdinReader {
    fn read_line(&self) -> std::io::Result<Option<String>> {
        let mut buf = String::new();
        if std::io::stdin().read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }
}

/// What a read produced. Cancellation is a first-class outcome, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Answer(String),
    Canceled,
}

impl ReadOutcome {
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }

    pub fn answer(self) -> Option<String> {
        match self {
            Self::Answer(value) => Some(value),
            Self::Canceled => None,
        }
    }
}

/// Errors a read can surface. All of them are fatal to the current prompt;
/// none is retried by the dispatcher itself.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Scripted session ran out of lines while being consumed directly.
    #[error(transparent)]
    Routine(#[from] RoutineError),

    #[error("terminal input closed")]
    Eof,

    #[error("terminal read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Dispatches every prompt's read to the scripted routine or the terminal.
#[derive(Clone, Debug)]
pub struct ReadDispatcher {
    ctx: DispatcherContext,
}

impl ReadDispatcher {
    pub fn new(ctx: &DispatcherContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    /// Read with default (never-firing) cancellation.
    pub async fn read(&self) -> Result<ReadOutcome, DispatchError> {
        self.read_with(&CancelToken::new()).await
    }

    /// Obtain the next answer.
    ///
    /// Scripted entry pending: consume it, echoing its value (and narration,
    /// when present) to the console; live terminal otherwise. The answer is
    /// resolved against the option registry and recorded to the session log.
    pub async fn read_with(&self, cancel: &CancelToken) -> Result<ReadOutcome, DispatchError> {
        let mut record = InputRecord::requested_at(self.ctx.clock().now_utc());

        let value = match self.ctx.dequeue_scripted() {
            Some((entry, use_delays)) => {
                record.set_description(entry.description());
                self.echo_replayed(&entry, use_delays).await?;
                entry.value().to_string()
            }
            None => match self.live_read(cancel).await? {
                Some(line) => line,
                None => return Ok(ReadOutcome::Canceled),
            },
        };

        record.answer(value.clone(), self.ctx.clock().now_utc());
        record.set_resolved_option(self.ctx.registry().resolve(&value));
        // The registry describes exactly one forthcoming answer. A later
        // free-text read that happens to look like an index must not inherit
        // the previous prompt's options.
        self.ctx.registry().clear();
        if self.ctx.recording() {
            self.ctx.session().record(record);
        }
        Ok(ReadOutcome::Answer(value))
    }

    /// Echo a scripted entry the way a human typing it would have looked:
    /// narration first, then the value in the replay color. With delay
    /// replay on, the recorded delay is halved to keep demos fast, capped by
    /// [`MAX_REPLAY_DELAY`], and slept out half before and half after the
    /// echo.
    async fn echo_replayed(&self, entry: &InputRecord, use_delays: bool) -> std::io::Result<()> {
        let console = self.ctx.console();
        if !entry.description().is_empty() {
            console.write_line(&styled_description(entry.description()))?;
        }

        let half = if use_delays {
            let replay = (entry.delay().unwrap_or_default() / 2).min(MAX_REPLAY_DELAY);
            replay / 2
        } else {
            Duration::ZERO
        };
        if !half.is_zero() {
            self.ctx.clock().sleep(half).await;
        }
        console.write_line(&styled_replay_value(entry.value()))?;
        if !half.is_zero() {
            self.ctx.clock().sleep(half).await;
        }
        Ok(())
    }

    /// Cancellable blocking read; `Ok(None)` means the token won the race.
    ///
    /// A token that is already fired returns without ever touching the
    /// terminal. Otherwise the blocking read runs on a worker and is raced
    /// against the token; when the token wins, the worker keeps running
    /// detached and whatever line it eventually produces is dropped, never
    /// fed to a later read.
    async fn live_read(&self, cancel: &CancelToken) -> Result<Option<String>, DispatchError> {
        if cancel.is_cancelled() {
            return Ok(None);
        }

        let reader = Arc::clone(self.ctx.reader());
        let pending = tokio::task::spawn_blocking(move || reader.read_line());

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Ok(None),
            joined = pending => match joined {
                Ok(Ok(Some(line))) => Ok(Some(line)),
                Ok(Ok(None)) => Err(DispatchError::Eof),
                Ok(Err(e)) => Err(DispatchError::Io(e)),
                Err(e) => Err(DispatchError::Io(std::io::Error::other(e))),
            },
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
