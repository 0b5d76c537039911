// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ephemeral record of the options shown by the most recent prompt.
//!
//! Rebuilt before every render so the dispatcher can resolve the forthcoming
//! answer back to an option, and so saved sessions are self-documenting. A
//! replay script can thus reference an option by its text as well as by
//! number. Never persisted on its own.

use crate::options::PromptOption;
use menuline_replay::RegisteredOption;
use parking_lot::Mutex;

/// Registry of currently displayed options. Repopulated on every render and
/// cleared once the dispatcher consumes it for one answer.
#[derive(Debug, Default)]
pub struct OptionRegistry {
    entries: Mutex<Vec<RegisteredOption>>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registry contents with the options about to be displayed.
    /// Must run before the read so the dispatcher can resolve the answer.
    pub fn repopulate(&self, prompt_message: &str, options: &[PromptOption]) {
        let mut entries = self.entries.lock();
        entries.clear();
        entries.extend(options.iter().map(|option| RegisteredOption {
            prompt_message: prompt_message.to_string(),
            text: option.label.clone(),
            index: option.index,
        }));
    }

    /// Resolve an answer string to the option whose 1-based displayed index
    /// matches it.
    pub fn resolve(&self, value: &str) -> Option<RegisteredOption> {
        let wanted = value.trim();
        self.entries
            .lock()
            .iter()
            .find(|entry| entry.displayed_index() == wanted)
            .cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn snapshot(&self) -> Vec<RegisteredOption> {
        self.entries.lock().clone()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
