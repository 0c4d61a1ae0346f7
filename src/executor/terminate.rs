//! Exit-on-failure execution
//!
//! `exec_or_exit` and its async twin return stdout on success and end the
//! host process with status 1 on any failure. Ending the process goes through
//! the [`Terminator`] seam so callers (and tests) can swap in their own.

use std::path::Path;

use colored::Colorize;

use super::runner::{exec_async_with, exec_with, ExecOptions};

/// Exit status used for every failed command
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Which execution path produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    Sync,
    Async,
}

/// Render the diagnostic printed before terminating
///
/// Plain text; the terminator decides how it is styled.
pub fn format_diagnostic(command: &str, message: &str, mode: ExecMode) -> String {
    let tag = match mode {
        ExecMode::Sync => "EXEC CMD ERROR",
        ExecMode::Async => "EXEC (ASYNC) CMD ERROR",
    };
    format!("{}: `{}`\n\n{}", tag, command, message)
}

/// Ends the host process after emitting a diagnostic
pub trait Terminator {
    /// Emit `diagnostic` and terminate with `code`. Never returns.
    fn terminate(&self, code: i32, diagnostic: &str) -> !;
}

/// Writes the diagnostic to stderr in red and calls [`std::process::exit`]
///
/// Colour is forced on, even when stdout or stderr is not a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessTerminator;

impl Terminator for ProcessTerminator {
    fn terminate(&self, code: i32, diagnostic: &str) -> ! {
        colored::control::set_override(true);
        eprintln!("{}", diagnostic.red());
        std::process::exit(code)
    }
}

/// Run a command and return its stdout, or terminate the process on failure
pub fn exec_or_exit(command: &str, working_dir: Option<&Path>) -> String {
    exec_or_exit_with(command, &ExecOptions::for_dir(working_dir), &ProcessTerminator)
}

/// [`exec_or_exit`] with explicit options and terminator
pub fn exec_or_exit_with<T: Terminator + ?Sized>(
    command: &str,
    options: &ExecOptions,
    terminator: &T,
) -> String {
    match exec_with(command, options) {
        Ok(stdout) => stdout,
        Err(err) => terminator.terminate(
            FAILURE_EXIT_CODE,
            &format_diagnostic(command, &err.message, ExecMode::Sync),
        ),
    }
}

/// Async counterpart of [`exec_or_exit`]
pub async fn exec_async_or_exit(command: &str, working_dir: Option<&Path>) -> String {
    exec_async_or_exit_with(command, &ExecOptions::for_dir(working_dir), &ProcessTerminator).await
}

/// [`exec_async_or_exit`] with explicit options and terminator
pub async fn exec_async_or_exit_with<T: Terminator + ?Sized>(
    command: &str,
    options: &ExecOptions,
    terminator: &T,
) -> String {
    match exec_async_with(command, options).await {
        Ok(stdout) => stdout,
        Err(err) => terminator.terminate(
            FAILURE_EXIT_CODE,
            &format_diagnostic(command, &err.message, ExecMode::Async),
        ),
    }
}
