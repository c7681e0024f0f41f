//! Sprout CLI - scaffold a new serverless Node.js project
//!
//! Usage: sprout [OPTIONS] <PROJECT_NAME>

mod cli;
mod commands;
mod logging;
mod ui;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ui = UiContext::new(cli.json, cli.color);
    match commands::cmd_new(&cli, &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            crate::ui::error::print_error(&err, &ui);
            ExitCode::FAILURE
        }
    }
}
