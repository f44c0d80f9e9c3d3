//! GymLog CLI Application
//!
//! Interactive, menu-driven front end for the in-memory exercise log.

mod args;
mod menu;
mod prompt;
mod renderer;

use std::io;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use gymlog_core::ExerciseLogBuilder;
use log::info;
use menu::Menu;
use prompt::Prompter;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color } = Args::parse();

    let log = ExerciseLogBuilder::new().build();
    let renderer = TerminalRenderer::new(!no_color);
    let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());

    info!("GymLog started");

    Menu::new(log, prompter, renderer)
        .run()
        .context("Interactive session failed")?;

    info!("GymLog finished");
    Ok(())
}
