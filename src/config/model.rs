//! Configuration model for cmdexec
//!
//! Defines the structure for XDG-compliant layered configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Shell used by the captured and async forms
    #[serde(default)]
    pub shell: ShellConfig,

    /// Default settings applied to every command
    #[serde(default)]
    pub defaults: Defaults,
}

/// Shell that interprets command strings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ShellConfig {
    /// Shell program (e.g. `sh`, `bash`, `cmd`)
    #[serde(default = "default_shell_program")]
    pub program: String,

    /// Flag that makes the shell read the command from its next argument
    #[serde(default = "default_shell_flag")]
    pub flag: String,
}

fn default_shell_program() -> String {
    if cfg!(windows) {
        "cmd".to_string()
    } else {
        "sh".to_string()
    }
}

fn default_shell_flag() -> String {
    if cfg!(windows) {
        "/C".to_string()
    } else {
        "-c".to_string()
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            program: default_shell_program(),
            flag: default_shell_flag(),
        }
    }
}

/// Default settings applied to every command
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Defaults {
    /// Working directory used when the caller gives none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

impl Config {
    /// Resolve the working directory for a command
    ///
    /// An explicit directory wins over the configured default.
    pub fn working_dir_for(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| self.defaults.working_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.shell.program, "sh");
        assert_eq!(config.shell.flag, "-c");
        assert!(config.defaults.working_dir.is_none());
    }

    #[test]
    fn test_deserialize_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
            [shell]
            program = "bash"
            flag = "-lc"

            [defaults]
            working_dir = "/srv/app"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();

        assert_eq!(config.shell.program, "bash");
        assert_eq!(config.shell.flag, "-lc");
        assert_eq!(config.defaults.working_dir, Some(PathBuf::from("/srv/app")));
    }

    #[test]
    fn test_partial_shell_section_keeps_default_flag() {
        let config: Config = toml::from_str("[shell]\nprogram = \"bash\"").unwrap();

        assert_eq!(config.shell.program, "bash");
        assert_eq!(config.shell.flag, ShellConfig::default().flag);
    }

    #[test]
    fn test_working_dir_for_prefers_explicit() {
        let config = Config {
            defaults: Defaults {
                working_dir: Some(PathBuf::from("/configured")),
            },
            ..Default::default()
        };

        assert_eq!(
            config.working_dir_for(Some(PathBuf::from("/explicit"))),
            Some(PathBuf::from("/explicit"))
        );
        assert_eq!(
            config.working_dir_for(None),
            Some(PathBuf::from("/configured"))
        );
        assert_eq!(Config::default().working_dir_for(None), None);
    }

    #[test]
    fn test_serialize_skips_unset_working_dir() {
        let rendered = toml::to_string(&Config::default()).unwrap();

        assert!(rendered.contains("[shell]"));
        assert!(!rendered.contains("working_dir"));
    }
}
