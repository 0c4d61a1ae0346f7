//! Common test utilities for cmdexec tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Creates a temporary directory containing the given files
pub fn create_dir_with_files(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (name, content) in files {
        std::fs::write(dir.path().join(name), content).expect("Failed to write file");
    }
    let path = dir.path().to_path_buf();
    (dir, path)
}

/// Writes a config file into a fresh temp directory
pub fn create_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("cmdexec.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// The cmdexec binary, isolated from user config and environment overrides
pub fn cmdexec() -> Command {
    let mut cmd = Command::cargo_bin("cmdexec").expect("Failed to find cmdexec binary");
    cmd.env_remove("CMDEXEC_SHELL__PROGRAM")
        .env_remove("CMDEXEC_SHELL__FLAG")
        .env_remove("CMDEXEC_DEFAULTS__WORKING_DIR")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env_remove("CLICOLOR_FORCE");
    cmd
}
