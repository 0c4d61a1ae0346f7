//! Forwarding execution
//!
//! Runs a program with the caller's own stdio attached, so output shows up as
//! it is produced. No shell is involved: the command string is split on
//! whitespace and nothing else. Quotes, pipes and redirections are passed
//! through to the program as literal arguments.

use std::path::Path;

use super::runner::ExecOptions;

/// Split a command line into program and arguments on runs of whitespace
///
/// Returns `None` for a blank command.
pub fn split_command(command: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Run a command with stdout/stderr forwarded, returning whether it exited 0
///
/// Spawn failures and blank commands yield `false`; no detail is kept.
pub fn exec_forwarding(command: &str, working_dir: Option<&Path>) -> bool {
    exec_forwarding_with(command, &ExecOptions::for_dir(working_dir))
}

/// [`exec_forwarding`] with explicit options
///
/// Only `working_dir` is honored; the configured shell is not used.
pub fn exec_forwarding_with(command: &str, options: &ExecOptions) -> bool {
    let Some((program, args)) = split_command(command) else {
        tracing::debug!("Empty command, nothing to forward");
        return false;
    };

    let mut cmd = std::process::Command::new(program);
    cmd.args(&args);

    if let Some(dir) = options.current_dir() {
        cmd.current_dir(dir);
    }

    tracing::debug!(working_dir = ?options.working_dir, "Forwarding: {}", command);

    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            tracing::debug!("Failed to spawn {}: {}", program, e);
            false
        }
    }
}
