// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt options and selection outcomes.

use crate::colors::{styled_default_marker, OptionColor};

/// How an option renders its line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// Plain numbered entry.
    #[default]
    Indexable,
    /// Numbered entry with a `[ ]`/`[x]` selection marker.
    Checkbox,
}

/// One labeled option offered by a selection prompt.
#[derive(Clone, Debug)]
pub struct PromptOption {
    pub label: String,
    pub color: OptionColor,
    /// 0-based position; displayed 1-based. Assigned when the option list is
    /// prepared for render.
    pub index: usize,
    /// Chosen on empty input. At most one option per render is honored.
    pub is_default: bool,
    pub selected: bool,
    pub style: RenderStyle,
}

impl PromptOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: OptionColor::Plain,
            index: 0,
            is_default: false,
            selected: false,
            style: RenderStyle::default(),
        }
    }

    pub fn with_color(mut self, color: OptionColor) -> Self {
        self.color = color;
        self
    }

    /// Mark as the default chosen on empty input.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Display form: `"{index+1}) {label}"`, default marker prefixed,
    /// checkbox marker between number and label for checkbox style.
    pub fn display_line(&self) -> String {
        let marker = if self.is_default {
            styled_default_marker()
        } else {
            "  ".to_string()
        };
        let checkbox = match self.style {
            RenderStyle::Indexable => "",
            RenderStyle::Checkbox if self.selected => "[x] ",
            RenderStyle::Checkbox => "[ ] ",
        };
        format!(
            "{}{}) {}{}",
            marker,
            self.index + 1,
            checkbox,
            self.color.paint(&self.label)
        )
    }
}

/// Outcome of a selection prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptResult {
    /// The prompt was escaped or the caller's token fired.
    Canceled,
    /// 0-based index of the chosen option.
    Selected(usize),
}

impl PromptResult {
    pub fn has_selection(&self) -> bool {
        matches!(self, Self::Selected(_))
    }

    pub fn selection(&self) -> Option<usize> {
        match self {
            Self::Selected(index) => Some(*index),
            Self::Canceled => None,
        }
    }
}

/// Prepare an option list for render: assign display indexes and honor at
/// most one default. When several options are marked default, the
/// first-declared one wins and the rest are cleared.
pub fn prepare_for_render(options: &mut [PromptOption]) {
    let mut default_seen = false;
    for (index, option) in options.iter_mut().enumerate() {
        option.index = index;
        if option.is_default {
            if default_seen {
                option.is_default = false;
            }
            default_seen = true;
        }
    }
}

/// Index of the honored default option, if any.
pub fn default_index(options: &[PromptOption]) -> Option<usize> {
    options.iter().position(|o| o.is_default)
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
