//! Command-line interface layer.
//!
//! Parses arguments, dispatches to commands and prints results. Kept apart
//! from `core` so the audit can be used as a library.

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;

use anyhow::Result;

pub use args::{Arguments, CheckArgs, Command, OutputFormat};
pub use exit_status::ExitStatus;

use commands::{check::check, init::init};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    if args.no_color {
        colored::control::set_override(false);
    }

    match args.command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => check(args.check),
    }
}
