//! Error types for cmdexec
//!
//! A command invocation fails in exactly one way: it did not exit cleanly.
//! Spawn failures, non-zero exits and signal terminations all map onto
//! [`ExecError`], distinguished only by the fields it carries.

use serde::Serialize;
use thiserror::Error;

/// Exit code recorded by the synchronous path when the failure carries no
/// numeric status (spawn failure, signal termination).
pub const FALLBACK_EXIT_CODE: i32 = 1;

/// A failed command invocation
///
/// Only ever built from a non-zero or errored outcome. A successful run never
/// produces one.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct ExecError {
    /// Exit status of the process
    ///
    /// The synchronous path always sets this, substituting
    /// [`FALLBACK_EXIT_CODE`] when no status exists. The asynchronous path
    /// stores whatever the process reported, so it is `None` on signal
    /// termination or spawn failure.
    pub exit_code: Option<i32>,
    /// Human-readable description of the failure
    pub message: String,
    /// Everything the command wrote to stderr
    pub stderr: String,
    /// Everything the command wrote to stdout
    pub stdout: String,
}

impl ExecError {
    /// Failure for a process that ran but did not exit with status 0
    pub fn command_failed(
        command: &str,
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        let stderr = stderr.into();
        let message = if stderr.is_empty() {
            format!("Command failed: {}", command)
        } else {
            format!("Command failed: {}\n{}", command, stderr)
        };

        Self {
            exit_code,
            message,
            stderr,
            stdout: stdout.into(),
        }
    }

    /// Failure for a process that could not be started at all
    pub fn spawn_failed(exit_code: Option<i32>, error: &std::io::Error) -> Self {
        Self {
            exit_code,
            message: error.to_string(),
            stderr: String::new(),
            stdout: String::new(),
        }
    }

    /// The exit code, or [`FALLBACK_EXIT_CODE`] when none was reported
    pub fn exit_code_or_fallback(&self) -> i32 {
        self.exit_code.unwrap_or(FALLBACK_EXIT_CODE)
    }
}
