// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI color definitions and styled text helpers for prompt rendering.

/// Blue for values echoed back during replay: RGB(97, 175, 239)
pub const REPLAY_ECHO: (u8, u8, u8) = (97, 175, 239);

/// Gray for replay narration and instruction lines: RGB(153, 153, 153)
pub const TEXT_GRAY: (u8, u8, u8) = (153, 153, 153);

/// Red for invalid selections and reported action errors: RGB(224, 108, 117)
pub const ERROR_RED: (u8, u8, u8) = (224, 108, 117);

/// Green for the default-option marker: RGB(152, 195, 121)
pub const DEFAULT_GREEN: (u8, u8, u8) = (152, 195, 121);

/// Clear the display and move the cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// ANSI escape sequence helpers (public for reuse)
pub mod escape {
    /// 24-bit foreground color
    pub fn fg(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }

    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";

    /// Bold
    pub const BOLD: &str = "\x1b[1m";

    /// Dim
    pub const DIM: &str = "\x1b[2m";
}

/// Palette an option label can be rendered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OptionColor {
    #[default]
    Plain,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
}

impl OptionColor {
    fn rgb(self) -> Option<(u8, u8, u8)> {
        match self {
            Self::Plain => None,
            Self::Red => Some((224, 108, 117)),
            Self::Green => Some((152, 195, 121)),
            Self::Yellow => Some((229, 192, 123)),
            Self::Blue => Some((97, 175, 239)),
            Self::Magenta => Some((198, 120, 221)),
            Self::Cyan => Some((86, 182, 194)),
            Self::Gray => Some(TEXT_GRAY),
        }
    }

    /// Wrap `text` in this color, resetting afterwards.
    pub fn paint(self, text: &str) -> String {
        match self.rgb() {
            None => text.to_string(),
            Some((r, g, b)) => format!("{}{}{}", escape::fg(r, g, b), text, escape::RESET),
        }
    }
}

/// Format a value echoed by the dispatcher while replaying a script.
///
/// Example output:
/// `[blue]2[reset]`
pub fn styled_replay_value(value: &str) -> String {
    let (r, g, b) = REPLAY_ECHO;
    format!("{}{}{}", escape::fg(r, g, b), value, escape::RESET)
}

/// Format replay narration shown before the echoed value (dim gray).
pub fn styled_description(text: &str) -> String {
    let (r, g, b) = TEXT_GRAY;
    format!(
        "{}{}{}{}",
        escape::DIM,
        escape::fg(r, g, b),
        text,
        escape::RESET
    )
}

/// Format the invalid-selection message (red).
pub fn styled_invalid(message: &str) -> String {
    let (r, g, b) = ERROR_RED;
    format!("{}{}{}", escape::fg(r, g, b), message, escape::RESET)
}

/// Format a reported action error with the failing item's label.
///
/// Example output:
/// `[red]error in 'Brew coffee': out of beans[reset]`
pub fn styled_action_error(label: &str, message: &str) -> String {
    let (r, g, b) = ERROR_RED;
    format!(
        "{}error in '{}': {}{}",
        escape::fg(r, g, b),
        label,
        message,
        escape::RESET
    )
}

/// Format the default-option marker prefix (green `>`).
pub fn styled_default_marker() -> String {
    let (r, g, b) = DEFAULT_GREEN;
    format!("{}>{} ", escape::fg(r, g, b), escape::RESET)
}

/// Format the fixed instruction line under a prompt message (dim gray).
pub fn styled_instruction(text: &str) -> String {
    styled_description(text)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
