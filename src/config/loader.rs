//! Configuration loader with XDG-compliant path resolution
//!
//! Loads configuration from multiple locations with layered priority:
//! 1. `/etc/cmdexec/config.toml` (lowest priority)
//! 2. `~/.config/cmdexec/config.toml`
//! 3. `~/.cmdexec.toml`
//! 4. `./.cmdexec.toml` (highest priority)

use std::path::PathBuf;

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use super::model::Config;

/// Application name used for XDG directories
const APP_NAME: &str = "cmdexec";

/// Prefix for environment overrides
const ENV_PREFIX: &str = "CMDEXEC_";

/// Get XDG config search paths in priority order (lowest to highest)
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from(format!("/etc/{}/config.toml", APP_NAME)));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_NAME).join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{}.toml", APP_NAME)));
    }

    paths.push(PathBuf::from(format!(".{}.toml", APP_NAME)));

    paths
}

/// Load configuration with XDG layering
///
/// Later files override earlier ones. Environment variables with prefix
/// `CMDEXEC_` override all file-based configuration.
///
/// # Arguments
/// * `override_path` - Optional path to a config file that takes highest file priority
pub fn load_config(override_path: Option<&str>) -> Result<Config> {
    load_config_with_env(override_path, ENV_PREFIX)
}

/// [`load_config`] reading environment overrides from `env_prefix`
fn load_config_with_env(override_path: Option<&str>, env_prefix: &str) -> Result<Config> {
    let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

    for path in config_paths() {
        if path.exists() {
            tracing::debug!("Loading config from: {}", path.display());
            figment = figment.merge(Toml::file(&path));
        }
    }

    if let Some(path) = override_path {
        let path = PathBuf::from(path);
        if path.exists() {
            tracing::debug!("Loading override config from: {}", path.display());
            figment = figment.merge(Toml::file(&path));
        } else {
            tracing::warn!("Override config not found: {}", path.display());
        }
    }

    // CMDEXEC_SHELL__PROGRAM=bash maps to shell.program = "bash"
    figment = figment.merge(Env::prefixed(env_prefix).split("__"));

    figment.extract().context("Failed to load configuration")
}

/// Find all existing config files
pub fn find_config_files() -> Vec<PathBuf> {
    config_paths().into_iter().filter(|p| p.exists()).collect()
}
