// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console writer behind the dispatcher and selection machine.
//!
//! Line-oriented colored writes only; no raw mode, no redraw-in-place.
//! Writing goes through a swappable boxed writer so tests capture output in
//! a buffer instead of stdout.

use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Shared handle over the output stream. Clones share the same writer.
#[derive(Clone)]
pub struct Console {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Console {
    /// Console over process stdout.
    pub fn stdout() -> Self {
        Self::from_writer(Box::new(std::io::stdout()))
    }

    /// Console over any writer (test buffers, files).
    pub fn from_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
        }
    }

    /// Write one line, flushing so prompts appear before a blocking read.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut w = self.writer.lock();
        writeln!(w, "{}", line)?;
        w.flush()
    }

    /// Write without a trailing newline (screen clears, inline echo).
    pub fn write_raw(&self, text: &str) -> std::io::Result<()> {
        let mut w = self.writer.lock();
        write!(w, "{}", text)?;
        w.flush()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
