// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Demo binary: a small menu exercising the dispatcher end to end.
//!
//! Run it interactively, record the session with `--record`, then replay
//! the exact run with `--replay` (optionally `--no-delays`).

use clap::Parser;

use menuline::cli::Cli;
use menuline::context::DispatcherContext;
use menuline::dispatch::{DispatchError, ReadDispatcher};
use menuline::menu::{ActionError, MenuBuilder};
use menuline::replay::{save_session, SessionMeta};
use menuline::select::SelectPrompt;
use menuline::time::Clock;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let ctx = DispatcherContext::new();
    match cli.routine(ctx.clock().now_utc()) {
        Ok(Some(routine)) => ctx.install_routine(routine),
        Ok(None) => {}
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
    ctx.set_recording(!cli.no_record);

    let mut menu = MenuBuilder::new("menuline demo")
        .clear_screen(cli.clear_screen)
        .item("Brew coffee", brew_coffee)
        .item("Leave a note", leave_note)
        .build(&ctx);

    match menu.run().await {
        Ok(()) => {}
        // Piped input running dry ends the demo the way an escape would.
        Err(DispatchError::Eof) => {}
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }

    if let Some(path) = &cli.record {
        let meta = SessionMeta {
            name: cli.session_name.clone(),
            created_at: ctx.session().created_at(),
            use_delays: true,
        };
        save_session(path, ctx.session(), &meta)?;
        println!("session saved to {}", path.display());
    }
    Ok(())
}

async fn brew_coffee(ctx: DispatcherContext) -> Result<(), ActionError> {
    const FLAVORS: [&str; 3] = ["espresso", "latte", "flat white"];
    let picked = SelectPrompt::new(&ctx)
        .select_from("Which coffee?", &FLAVORS, |f| f.to_string(), false, None)
        .await?;
    if let Some(flavor) = picked {
        ctx.console().write_line(&format!("Brewing a cup of {flavor}."))?;
    }
    Ok(())
}

async fn leave_note(ctx: DispatcherContext) -> Result<(), ActionError> {
    ctx.console().write_line("What should the note say?")?;
    let outcome = ReadDispatcher::new(&ctx).read().await?;
    if let Some(note) = outcome.answer() {
        ctx.console().write_line(&format!("Noted: {note}"))?;
    }
    Ok(())
}
