//! Captured command execution, blocking and async
//!
//! Both forms hand the command string to a shell, capture stdout/stderr into
//! memory and funnel every outcome through [`normalize_output`]. They differ
//! only in how a missing exit status is recorded (see [`ExitCodePolicy`]).

use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};

use crate::config::{Config, ShellConfig};
use crate::error::{ExecError, FALLBACK_EXIT_CODE};

/// Outcome of a captured invocation: stdout on success, the failure otherwise
pub type ExecOutcome = Result<String, ExecError>;

/// How a failure without a numeric exit status is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCodePolicy {
    /// Substitute [`FALLBACK_EXIT_CODE`] (blocking path)
    FallbackToOne,
    /// Keep whatever the process reported, possibly nothing (async path)
    AsReported,
}

impl ExitCodePolicy {
    fn apply(self, code: Option<i32>) -> Option<i32> {
        match self {
            Self::FallbackToOne => Some(code.unwrap_or(FALLBACK_EXIT_CODE)),
            Self::AsReported => code,
        }
    }
}

/// Options for command execution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOptions {
    /// Working directory (None or empty = inherit the caller's)
    pub working_dir: Option<PathBuf>,
    /// Shell that interprets the command string
    pub shell: ShellConfig,
}

impl ExecOptions {
    /// Create options with a working directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
            ..Default::default()
        }
    }

    /// Options for an optional working directory and the default shell
    ///
    /// An empty path counts as no directory.
    pub fn for_dir(dir: Option<&Path>) -> Self {
        Self {
            working_dir: non_empty(dir).map(Path::to_path_buf),
            ..Default::default()
        }
    }

    /// Options built from loaded configuration
    ///
    /// An explicit directory wins over `defaults.working_dir`.
    pub fn from_config(config: &Config, dir: Option<PathBuf>) -> Self {
        Self {
            working_dir: config.working_dir_for(dir.filter(|d| !d.as_os_str().is_empty())),
            shell: config.shell.clone(),
        }
    }

    /// Set the shell
    pub fn with_shell(mut self, program: impl Into<String>, flag: impl Into<String>) -> Self {
        self.shell = ShellConfig {
            program: program.into(),
            flag: flag.into(),
        };
        self
    }

    /// Directory the child should start in, if any
    pub fn current_dir(&self) -> Option<&Path> {
        non_empty(self.working_dir.as_deref())
    }
}

fn non_empty(dir: Option<&Path>) -> Option<&Path> {
    dir.filter(|d| !d.as_os_str().is_empty())
}

/// Turn a finished (or unstartable) process into an [`ExecOutcome`]
pub fn normalize_output(
    command: &str,
    result: std::io::Result<Output>,
    policy: ExitCodePolicy,
) -> ExecOutcome {
    match result {
        Ok(output) if output.status.success() => {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(output) => Err(ExecError::command_failed(
            command,
            policy.apply(output.status.code()),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        )),
        Err(e) => Err(ExecError::spawn_failed(policy.apply(None), &e)),
    }
}

/// Run a command through the shell and wait for it, capturing its output
///
/// Never fails in the `?` sense: every failure mode lands in the `Err` arm.
///
/// # Arguments
/// * `command` - Full command line, interpreted by the shell
/// * `working_dir` - Directory to run in (None = current directory)
pub fn exec(command: &str, working_dir: Option<&Path>) -> ExecOutcome {
    exec_with(command, &ExecOptions::for_dir(working_dir))
}

/// [`exec`] with explicit options
pub fn exec_with(command: &str, options: &ExecOptions) -> ExecOutcome {
    let mut cmd = std::process::Command::new(&options.shell.program);
    cmd.arg(&options.shell.flag).arg(command);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    if let Some(dir) = options.current_dir() {
        cmd.current_dir(dir);
    }

    tracing::debug!(
        shell = %options.shell.program,
        working_dir = ?options.working_dir,
        "Executing: {}",
        command
    );

    normalize_output(command, cmd.output(), ExitCodePolicy::FallbackToOne)
}

/// Whether a command exits with status 0
pub fn exec_succeeded(command: &str, working_dir: Option<&Path>) -> bool {
    exec(command, working_dir).is_ok()
}

/// [`exec_succeeded`] with explicit options
pub fn exec_succeeded_with(command: &str, options: &ExecOptions) -> bool {
    exec_with(command, options).is_ok()
}

/// Async counterpart of [`exec`]
///
/// The calling task yields while the process runs. Dropping the future does
/// not kill the process; it still runs to completion.
///
/// On failure the exit code is kept exactly as reported, so a process killed
/// by a signal, or one that never started, yields `exit_code: None`.
pub async fn exec_async(command: &str, working_dir: Option<&Path>) -> ExecOutcome {
    exec_async_with(command, &ExecOptions::for_dir(working_dir)).await
}

/// [`exec_async`] with explicit options
pub async fn exec_async_with(command: &str, options: &ExecOptions) -> ExecOutcome {
    let mut cmd = tokio::process::Command::new(&options.shell.program);
    cmd.arg(&options.shell.flag).arg(command);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    if let Some(dir) = options.current_dir() {
        cmd.current_dir(dir);
    }

    tracing::debug!(
        shell = %options.shell.program,
        working_dir = ?options.working_dir,
        "Executing async: {}",
        command
    );

    normalize_output(command, cmd.output().await, ExitCodePolicy::AsReported)
}

/// Async counterpart of [`exec_succeeded`]
pub async fn exec_async_succeeded(command: &str, working_dir: Option<&Path>) -> bool {
    exec_async(command, working_dir).await.is_ok()
}

/// [`exec_async_succeeded`] with explicit options
pub async fn exec_async_succeeded_with(command: &str, options: &ExecOptions) -> bool {
    exec_async_with(command, options).await.is_ok()
}
