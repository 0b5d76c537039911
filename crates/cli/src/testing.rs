// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test doubles for driving prompts without a terminal.
//!
//! Used by this crate's own tests and exported for applications testing
//! their menus: a [`ScriptedReader`] stands in for the terminal, a
//! [`CaptureWriter`] stands in for stdout.

use crate::dispatch::LineReader;
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use std::sync::Arc;

enum WhenEmpty {
    Eof,
    Block,
}

/// A [`LineReader`] serving pre-queued lines.
///
/// When the queue runs dry it either reports end of input or blocks until
/// another line is pushed, depending on the constructor.
pub struct ScriptedReader {
    lines: Mutex<VecDeque<String>>,
    when_empty: WhenEmpty,
    available: Condvar,
}

impl ScriptedReader {
    /// Reader that reports EOF once the queued lines run out.
    pub fn eof_when_empty<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self::build(lines, WhenEmpty::Eof)
    }

    /// Reader that blocks when empty until [`push_line`](Self::push_line)
    /// supplies more input, like a human who has not typed yet.
    pub fn block_when_empty<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self::build(lines, WhenEmpty::Block)
    }

    fn build<S: AsRef<str>>(lines: impl IntoIterator<Item = S>, when_empty: WhenEmpty) -> Self {
        Self {
            lines: Mutex::new(lines.into_iter().map(|l| l.as_ref().to_string()).collect()),
            when_empty,
            available: Condvar::new(),
        }
    }

    /// Queue another line, waking a blocked read.
    pub fn push_line(&self, line: impl Into<String>) {
        self.lines.lock().push_back(line.into());
        self.available.notify_one();
    }

    /// Lines not yet consumed.
    pub fn pending(&self) -> usize {
        self.lines.lock().len()
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&self) -> std::io::Result<Option<String>> {
        let mut lines = self.lines.lock();
        loop {
            if let Some(line) = lines.pop_front() {
                return Ok(Some(line));
            }
            match self.when_empty {
                WhenEmpty::Eof => return Ok(None),
                WhenEmpty::Block => {
                    self.available.wait(&mut lines);
                }
            }
        }
    }
}

/// A writer capturing everything written, shareable across clones.
#[derive(Clone, Default)]
pub struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Contents with ANSI escape sequences stripped, for readable asserts.
    pub fn plain_contents(&self) -> String {
        strip_ansi(&self.contents())
    }
}

impl std::io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Drop `ESC [ ... <final byte>` sequences.
fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "testing_tests.rs"]
mod tests;
