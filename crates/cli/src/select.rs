// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The render/validate/retry loop used by all menu-style prompts.
//!
//! Because every read goes through the dispatcher, the loop behaves
//! identically whether a human or a replayed script is answering. That is
//! the toolkit's core testability property.

use crate::cancel::CancelToken;
use crate::colors::{styled_instruction, styled_invalid, CLEAR_SCREEN};
use crate::context::DispatcherContext;
use crate::dispatch::{DispatchError, ReadDispatcher, ReadOutcome};
use crate::options::{default_index, prepare_for_render, PromptOption, PromptResult};

/// Reserved inputs that cancel the prompt instead of selecting, matched
/// case-insensitively and ahead of numeric interpretation.
pub const ESCAPE_PHRASES: [&str; 4] = ["go back", "back", "exit", "goback"];

const INSTRUCTION: &str = "Select an option by number, or type 'back' to cancel.";
const INVALID_MESSAGE: &str = "Invalid selection. Try again.";

/// Menu-style selection prompt over a dispatcher context.
#[derive(Clone, Debug)]
pub struct SelectPrompt {
    ctx: DispatcherContext,
    dispatcher: ReadDispatcher,
}

impl SelectPrompt {
    pub fn new(ctx: &DispatcherContext) -> Self {
        Self {
            ctx: ctx.clone(),
            dispatcher: ReadDispatcher::new(ctx),
        }
    }

    /// Render the options and loop until a terminal outcome.
    ///
    /// Answer interpretation, in priority order: cancellation; empty input
    /// with a default option; an escape phrase; a 1-based in-range number.
    /// Anything else reports an invalid selection and re-renders; the
    /// default is not applied on behalf of a failed attempt, the user must
    /// answer again.
    ///
    /// The chosen option is marked `selected` in place, which is how
    /// checkbox-style callers observe the pick on their next render.
    pub async fn run(
        &self,
        message: &str,
        options: &mut [PromptOption],
        clear_screen: bool,
        cancel: Option<&CancelToken>,
    ) -> Result<PromptResult, DispatchError> {
        prepare_for_render(options);
        let console = self.ctx.console();

        loop {
            if clear_screen {
                console.write_raw(CLEAR_SCREEN)?;
            }
            console.write_line(message)?;
            console.write_line(&styled_instruction(INSTRUCTION))?;
            for option in options.iter() {
                console.write_line(&option.display_line())?;
            }

            // Before the read, so the dispatcher can resolve the forthcoming
            // answer against what is on screen.
            self.ctx.registry().repopulate(message, options);

            let outcome = match cancel {
                Some(token) => self.dispatcher.read_with(token).await?,
                None => self.dispatcher.read().await?,
            };
            let value = match outcome {
                ReadOutcome::Canceled => return Ok(PromptResult::Canceled),
                ReadOutcome::Answer(value) => value,
            };
            let input = value.trim();

            if input.is_empty() {
                if let Some(index) = default_index(options) {
                    options[index].selected = true;
                    return Ok(PromptResult::Selected(index));
                }
            } else if ESCAPE_PHRASES
                .iter()
                .any(|phrase| input.eq_ignore_ascii_case(phrase))
            {
                return Ok(PromptResult::Canceled);
            } else if let Ok(n) = input.parse::<usize>() {
                if (1..=options.len()).contains(&n) {
                    options[n - 1].selected = true;
                    return Ok(PromptResult::Selected(n - 1));
                }
            }

            console.write_line(&styled_invalid(INVALID_MESSAGE))?;
        }
    }

    /// Typed variant: options over arbitrary domain items with a label
    /// function. Delegates entirely to [`run`](Self::run); `None` means the
    /// prompt was canceled.
    pub async fn select_from<'a, T>(
        &self,
        message: &str,
        items: &'a [T],
        label: impl Fn(&T) -> String,
        clear_screen: bool,
        cancel: Option<&CancelToken>,
    ) -> Result<Option<&'a T>, DispatchError> {
        let mut options: Vec<PromptOption> = items
            .iter()
            .map(|item| PromptOption::new(label(item)))
            .collect();
        match self.run(message, &mut options, clear_screen, cancel).await? {
            PromptResult::Canceled => Ok(None),
            PromptResult::Selected(index) => Ok(items.get(index)),
        }
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
