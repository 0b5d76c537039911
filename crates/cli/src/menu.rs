// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Explicit menu registration and the top-level menu loop.
//!
//! Application code registers each option directly; there is no runtime
//! discovery. Actions receive a context clone so they can prompt further
//! through the same dispatcher, and a failing action is reported at the loop
//! boundary rather than crashing the run, so the session can still be saved
//! afterwards.

use crate::cancel::CancelToken;
use crate::colors::{styled_action_error, OptionColor};
use crate::context::DispatcherContext;
use crate::dispatch::DispatchError;
use crate::options::{PromptOption, PromptResult};
use crate::select::SelectPrompt;
use std::future::Future;
use std::pin::Pin;

/// Error a menu action may return; caught and reported, never propagated.
pub type ActionError = Box<dyn std::error::Error + Send + Sync>;

/// Boxed future returned by a menu action.
pub type ActionFuture = Pin<Box<dyn Future<Output = Result<(), ActionError>> + Send>>;

type MenuAction = Box<dyn FnMut(DispatcherContext) -> ActionFuture + Send>;

struct MenuItem {
    label: String,
    color: OptionColor,
    is_default: bool,
    action: MenuAction,
}

/// Registration API for menus: `(label, color, is_default, action)` tuples
/// declared by the application.
pub struct MenuBuilder {
    title: String,
    clear_screen: bool,
    items: Vec<MenuItem>,
}

impl MenuBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            clear_screen: false,
            items: Vec::new(),
        }
    }

    /// Clear the display before each render.
    pub fn clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Register an option.
    pub fn item<F, Fut>(self, label: impl Into<String>, action: F) -> Self
    where
        F: FnMut(DispatcherContext) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
    {
        self.register(label, OptionColor::Plain, false, action)
    }

    /// Register a colored option.
    pub fn colored_item<F, Fut>(
        self,
        label: impl Into<String>,
        color: OptionColor,
        action: F,
    ) -> Self
    where
        F: FnMut(DispatcherContext) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
    {
        self.register(label, color, false, action)
    }

    /// Register the option chosen on empty input.
    pub fn default_item<F, Fut>(self, label: impl Into<String>, action: F) -> Self
    where
        F: FnMut(DispatcherContext) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
    {
        self.register(label, OptionColor::Plain, true, action)
    }

    fn register<F, Fut>(
        mut self,
        label: impl Into<String>,
        color: OptionColor,
        is_default: bool,
        mut action: F,
    ) -> Self
    where
        F: FnMut(DispatcherContext) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
    {
        self.items.push(MenuItem {
            label: label.into(),
            color,
            is_default,
            action: Box::new(move |ctx| Box::pin(action(ctx))),
        });
        self
    }

    pub fn build(self, ctx: &DispatcherContext) -> Menu {
        Menu {
            ctx: ctx.clone(),
            prompt: SelectPrompt::new(ctx),
            title: self.title,
            clear_screen: self.clear_screen,
            items: self.items,
        }
    }
}

/// A built menu ready to loop.
pub struct Menu {
    ctx: DispatcherContext,
    prompt: SelectPrompt,
    title: String,
    clear_screen: bool,
    items: Vec<MenuItem>,
}

impl Menu {
    /// Run until escaped, with default (never-firing) cancellation.
    pub async fn run(&mut self) -> Result<(), DispatchError> {
        self.run_with(&CancelToken::new()).await
    }

    /// Run until the prompt is escaped or the token fires. Each loop renders
    /// the registered options, dispatches the choice and invokes its action;
    /// an action error is reported with the failing item's label and the
    /// loop continues.
    pub async fn run_with(&mut self, cancel: &CancelToken) -> Result<(), DispatchError> {
        loop {
            let mut options: Vec<PromptOption> = self
                .items
                .iter()
                .map(|item| {
                    let mut option =
                        PromptOption::new(item.label.clone()).with_color(item.color);
                    option.is_default = item.is_default;
                    option
                })
                .collect();

            let result = self
                .prompt
                .run(&self.title, &mut options, self.clear_screen, Some(cancel))
                .await?;
            let index = match result {
                PromptResult::Canceled => return Ok(()),
                PromptResult::Selected(index) => index,
            };

            if let Some(item) = self.items.get_mut(index) {
                if let Err(error) = (item.action)(self.ctx.clone()).await {
                    self.ctx
                        .console()
                        .write_line(&styled_action_error(&item.label, &error.to_string()))?;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
