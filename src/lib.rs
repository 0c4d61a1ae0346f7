//! cmdexec - Run shell commands, get a uniform result
//!
//! A thin layer over subprocess execution for scripts and build tools.
//! Every entry point runs one command and reports its outcome:
//!
//! - [`exec`] / [`exec_async`] - capture output through the shell, returning
//!   stdout or an [`ExecError`]
//! - [`exec_succeeded`] / [`exec_async_succeeded`] - just the verdict
//! - [`exec_or_exit`] / [`exec_async_or_exit`] - stdout, or print a red
//!   diagnostic and exit the host process with status 1
//! - [`exec_forwarding`] - stream output to the caller's own stdio; the
//!   command is split on whitespace and run without a shell
//!
//! ## Example
//!
//! ```no_run
//! match cmdexec::exec("git rev-parse HEAD", None) {
//!     Ok(sha) => println!("at {}", sha.trim()),
//!     Err(err) => eprintln!("git exited with {:?}: {}", err.exit_code, err.stderr),
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::ExecError;
pub use executor::{
    exec, exec_async, exec_async_or_exit, exec_async_or_exit_with, exec_async_succeeded,
    exec_async_succeeded_with, exec_async_with, exec_forwarding, exec_forwarding_with,
    exec_or_exit, exec_or_exit_with, exec_succeeded, exec_succeeded_with, exec_with,
    format_diagnostic, split_command, ExecMode, ExecOptions, ExecOutcome, ExitCodePolicy,
    ProcessTerminator, Terminator,
};
