//! CLI command definitions using clap
//!
//! Defines all CLI subcommands and their arguments.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Run shell commands and report a uniform result.
///
/// Each subcommand maps to one calling pattern: capture, forward, check or
/// exit-on-failure.
#[derive(Parser, Debug)]
#[command(name = "cmdexec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (overrides default XDG paths)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a command through the shell, capturing its output
    Run(RunArgs),

    /// Run a command with output forwarded (no shell, whitespace-split)
    Forward(ForwardArgs),

    /// Report whether a command succeeds
    Check(CheckArgs),

    /// Print a command's output, or exit with status 1 if it fails
    Exit(ExitArgs),

    /// Show the resolved configuration
    Config,
}

/// Options shared by every command-running subcommand
#[derive(Args, Debug, Clone)]
pub struct CommandTarget {
    /// Full command line
    #[arg(required = true)]
    pub command: String,

    /// Working directory (defaults to the configured one, then the current one)
    #[arg(short = 'C', long = "dir", value_parser = parse_dir)]
    pub dir: Option<PathBuf>,
}

/// Parse a working directory, allowing an empty value (= current directory)
fn parse_dir(s: &str) -> Result<PathBuf, String> {
    Ok(PathBuf::from(s))
}

/// Arguments for the `run` subcommand
#[derive(Parser, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub target: CommandTarget,

    /// Use the non-blocking execution path
    #[arg(long = "async")]
    pub use_async: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for the `forward` subcommand
#[derive(Parser, Debug)]
pub struct ForwardArgs {
    #[command(flatten)]
    pub target: CommandTarget,
}

/// Arguments for the `check` subcommand
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub target: CommandTarget,

    /// Use the non-blocking execution path
    #[arg(long = "async")]
    pub use_async: bool,
}

/// Arguments for the `exit` subcommand
#[derive(Parser, Debug)]
pub struct ExitArgs {
    #[command(flatten)]
    pub target: CommandTarget,

    /// Use the non-blocking execution path
    #[arg(long = "async")]
    pub use_async: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Labeled, human-readable summary
    Table,
    /// JSON: `{stdout}` on success, `{exit_code, message, stderr, stdout}` on failure
    Json,
    /// Raw stdout on success, error message on failure
    Plain,
}
