// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared state threaded through the dispatcher and the selection machine.
//!
//! Everything that used to be process-global lives here explicitly: the
//! installed routine, the session log, the option registry, the recording
//! flag, the clock and the I/O endpoints. Core logic takes a context by
//! reference, so isolated tests build their own; a process-wide default
//! instance is offered for convenience only.

use crate::dispatch::{LineReader, StdinReader};
use crate::output::Console;
use crate::registry::OptionRegistry;
use crate::time::ClockHandle;
use menuline_replay::{InputRecord, Routine, SessionLog};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// Dispatcher state for one interactive run. Clones share the same state.
#[derive(Clone)]
pub struct DispatcherContext {
    routine: Arc<Mutex<Option<Routine>>>,
    session: SessionLog,
    registry: Arc<OptionRegistry>,
    recording: Arc<AtomicBool>,
    clock: ClockHandle,
    console: Console,
    reader: Arc<dyn LineReader>,
}

impl DispatcherContext {
    /// Context over the real terminal, system clock, recording enabled.
    pub fn new() -> Self {
        Self {
            routine: Arc::new(Mutex::new(None)),
            session: SessionLog::new(),
            registry: Arc::new(OptionRegistry::new()),
            recording: Arc::new(AtomicBool::new(true)),
            clock: ClockHandle::system(),
            console: Console::stdout(),
            reader: Arc::new(StdinReader),
        }
    }

    /// The process-wide default instance. Clones share its state; prefer a
    /// dedicated context in tests.
    pub fn process_default() -> Self {
        static DEFAULT: OnceLock<DispatcherContext> = OnceLock::new();
        DEFAULT.get_or_init(Self::new).clone()
    }

    pub fn with_clock(mut self, clock: ClockHandle) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    pub fn with_reader(mut self, reader: Arc<dyn LineReader>) -> Self {
        self.reader = reader;
        self
    }

    pub fn with_routine(self, routine: Routine) -> Self {
        self.install_routine(routine);
        self
    }

    /// Install (or replace) the scripted input source for this run. The
    /// context owns it exclusively from here on.
    pub fn install_routine(&self, routine: Routine) {
        *self.routine.lock() = Some(routine);
    }

    /// Whether a scripted entry is pending.
    pub fn has_scripted_input(&self) -> bool {
        self.routine.lock().as_ref().is_some_and(Routine::has_next)
    }

    /// Consume the next scripted entry, along with the routine's delay flag.
    /// `None` when no routine is installed or the script has run dry (the
    /// dispatcher then falls through to the terminal).
    pub(crate) fn dequeue_scripted(&self) -> Option<(InputRecord, bool)> {
        let mut slot = self.routine.lock();
        let routine = slot.as_mut()?;
        let use_delays = routine.use_delays();
        routine.dequeue().ok().map(|record| (record, use_delays))
    }

    pub fn session(&self) -> &SessionLog {
        &self.session
    }

    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    pub fn clock(&self) -> &ClockHandle {
        &self.clock
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub(crate) fn reader(&self) -> &Arc<dyn LineReader> {
        &self.reader
    }

    /// Whether answers are appended to the session log.
    pub fn recording(&self) -> bool {
        self.recording.load(Ordering::SeqCst)
    }

    pub fn set_recording(&self, recording: bool) {
        self.recording.store(recording, Ordering::SeqCst);
    }
}

impl Default for DispatcherContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DispatcherContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatcherContext")
            .field("recording", &self.recording())
            .field("scripted_pending", &self.has_scripted_input())
            .field("session_len", &self.session.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
