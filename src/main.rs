//! cmdexec CLI entry point
//!
//! Usage:
//!   cmdexec run <command>       Run through the shell, capture output
//!   cmdexec forward <command>   Run with output forwarded, no shell
//!   cmdexec check <command>     Print whether the command succeeds
//!   cmdexec exit <command>      Print output, or exit 1 on failure
//!   cmdexec config              Show configuration

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cmdexec::cli::{
    commands::{CheckArgs, ExitArgs, ForwardArgs, OutputFormat, RunArgs},
    Cli, Commands,
};
use cmdexec::config::{load_config, Config};
use cmdexec::executor::{
    exec_async_or_exit_with, exec_async_succeeded_with, exec_async_with, exec_forwarding_with,
    exec_or_exit_with, exec_succeeded_with, exec_with, ExecOptions, ExecOutcome,
    ProcessTerminator,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_tracing(verbose: bool) {
    let default = if verbose { "cmdexec=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run(args) => run_captured(args, &config).await,
        Commands::Forward(args) => Ok(forward(args, &config)),
        Commands::Check(args) => check(args, &config).await,
        Commands::Exit(args) => exit_on_failure(args, &config).await,
        Commands::Config => show_config(&config),
    }
}

/// Run a command with captured output and report the result
async fn run_captured(args: RunArgs, config: &Config) -> Result<ExitCode> {
    let options = ExecOptions::from_config(config, args.target.dir.clone());
    let command = &args.target.command;

    let outcome: ExecOutcome = if args.use_async {
        exec_async_with(command, &options).await
    } else {
        exec_with(command, &options)
    };

    match args.format {
        OutputFormat::Json => {
            let json = match &outcome {
                Ok(stdout) => serde_json::json!({ "stdout": stdout }),
                Err(err) => serde_json::to_value(err)?,
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Table => print_table(command, &outcome),
        OutputFormat::Plain => match &outcome {
            Ok(stdout) => {
                let mut out = std::io::stdout().lock();
                out.write_all(stdout.as_bytes())
                    .context("Failed to write command output")?;
                out.flush()?;
            }
            Err(err) => eprintln!("{}", err.message),
        },
    }

    Ok(match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(exit_status(err.exit_code_or_fallback())),
    })
}

/// Print a labeled summary of a captured run
fn print_table(command: &str, outcome: &ExecOutcome) {
    println!("{}: {}", "Command".cyan(), command);

    match outcome {
        Ok(stdout) => {
            println!("{}: {}", "Status".cyan(), "success".green());
            println!();
            println!("{}:", "Stdout".cyan());
            print!("{}", stdout);
        }
        Err(err) => {
            println!("{}: {}", "Status".cyan(), "failed".red());
            match err.exit_code {
                Some(code) => println!("{}: {}", "Exit code".cyan(), code),
                None => println!("{}: {}", "Exit code".cyan(), "none"),
            }
            println!("{}: {}", "Message".cyan(), err.message);
            println!();
            println!("{}:", "Stdout".cyan());
            print!("{}", err.stdout);
            println!();
            println!("{}:", "Stderr".cyan());
            print!("{}", err.stderr);
        }
    }
}

/// Run a command with stdio forwarded
fn forward(args: ForwardArgs, config: &Config) -> ExitCode {
    let options = ExecOptions::from_config(config, args.target.dir);

    if exec_forwarding_with(&args.target.command, &options) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Print whether a command succeeds
async fn check(args: CheckArgs, config: &Config) -> Result<ExitCode> {
    let options = ExecOptions::from_config(config, args.target.dir);

    let succeeded = if args.use_async {
        exec_async_succeeded_with(&args.target.command, &options).await
    } else {
        exec_succeeded_with(&args.target.command, &options)
    };

    println!("{}", succeeded);

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Print a command's output; the process exits on failure
async fn exit_on_failure(args: ExitArgs, config: &Config) -> Result<ExitCode> {
    let options = ExecOptions::from_config(config, args.target.dir);

    let stdout = if args.use_async {
        exec_async_or_exit_with(&args.target.command, &options, &ProcessTerminator).await
    } else {
        exec_or_exit_with(&args.target.command, &options, &ProcessTerminator)
    };

    let mut out = std::io::stdout().lock();
    out.write_all(stdout.as_bytes())
        .context("Failed to write command output")?;
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}

/// Print the resolved configuration as TOML
fn show_config(config: &Config) -> Result<ExitCode> {
    let rendered = toml::to_string_pretty(config).context("Failed to render configuration")?;
    print!("{}", rendered);
    Ok(ExitCode::SUCCESS)
}

/// Clamp a child's exit status into the range a process can exit with
fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status_in_range() {
        assert_eq!(exit_status(0), 0);
        assert_eq!(exit_status(3), 3);
        assert_eq!(exit_status(255), 255);
    }

    #[test]
    fn test_exit_status_out_of_range() {
        assert_eq!(exit_status(-1), 1);
        assert_eq!(exit_status(256), 1);
    }
}
