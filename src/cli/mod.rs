//! CLI module for cmdexec
//!
//! Provides command-line interface with the following subcommands:
//! - `run` - Captured execution
//! - `forward` - Forwarded execution
//! - `check` - Boolean success
//! - `exit` - Exit-on-failure execution
//! - `config` - Show configuration

pub mod commands;

pub use commands::{Cli, Commands};
