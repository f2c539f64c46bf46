//! CLI argument definitions using clap.
//!
//! Running `transcov` without a subcommand audits the current directory,
//! exactly like `transcov check`.
//!
//! ## Commands
//!
//! - `check`: Audit translation key coverage (default)
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub check: CheckArgs,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Project root directory (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Translation file to use instead of searching for one (relative to the current directory)
    #[arg(long, env = "TRANSCOV_RESOURCE")]
    pub resource: Option<PathBuf>,

    /// Fail when a source file cannot be read instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Audit translation key coverage (the default when no command is given)
    Check(CheckArgs),
    /// Initialize a new .transcovrc.json configuration file
    Init,
}
