//! Configuration module for cmdexec
//!
//! XDG-compliant layered configuration selecting the shell and the default
//! working directory.

pub mod loader;
pub mod model;

pub use loader::{config_paths, find_config_files, load_config};
pub use model::*;
