// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cooperative cancellation for blocking prompt reads.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Cancellation token shared between a prompt caller and the read
/// dispatcher.
///
/// Cancellation is cooperative and external: the engine never cancels on its
/// own, a caller fires the token (for example from a timeout elsewhere in the
/// program) and the dispatcher's pending read resolves to a canceled outcome.
/// Clones observe the same token.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    notify: Notify,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the token. Idempotent; wakes every pending wait.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
        self.inner.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Resolve once the token fires. Returns immediately when already fired.
    pub async fn cancelled(&self) {
        while !self.is_cancelled() {
            let notified = self.inner.notify.notified();
            // Re-check after arming so a cancel between the loop test and
            // `notified()` is not missed.
            if self.is_cancelled() {
                break;
            }
            notified.await;
        }
    }
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod tests;
