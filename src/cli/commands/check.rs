use std::env;

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::super::{
    args::{CheckArgs, OutputFormat},
    exit_status::ExitStatus,
    report,
};
use crate::{
    config::{CONFIG_FILE_NAME, load_config},
    core::{AuditOptions, run_audit},
};

pub fn check(args: CheckArgs) -> Result<ExitStatus> {
    // Relative paths on the command line are taken from where the user stands.
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let root = match args.path {
        Some(path) => cwd.join(path),
        None => cwd.clone(),
    };
    if !root.is_dir() {
        bail!("Project root is not a directory: {}", root.display());
    }

    let loaded = load_config(&root)?;
    if args.verbose && loaded.from_file {
        eprintln!("{} Using {}", "note:".bold(), CONFIG_FILE_NAME);
    }

    let options = AuditOptions {
        resource: args.resource.map(|path| cwd.join(path)),
        strict: args.strict,
        verbose: args.verbose,
    };
    let outcome = run_audit(&root, &loaded.config, &options)?;

    report::print_warnings(&outcome, args.verbose);
    if args.verbose {
        report::print_details(&outcome);
    }
    match args.format {
        OutputFormat::Text => report::print_text(&outcome)?,
        OutputFormat::Json => report::print_json(&outcome)?,
    }

    Ok(ExitStatus::from_report(&outcome.report))
}
