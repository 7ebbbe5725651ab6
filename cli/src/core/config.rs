//! # faqbot Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Loads the optional `.faqbot.toml` configuration file. Every setting is
//! optional; anything left out falls back to the defaults applied by the
//! command that consumes it (see `commands::serve::config`).
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags set away from their defaults (merged by the command)
//! 2. An explicit file passed via `--config` / `FAQBOT_CONFIG`
//! 3. `.faqbot.toml` in the current directory or the nearest ancestor,
//!    stopping at the first directory containing `.git`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 9000
//! enable_cors = false
//! debug = true
//! ```
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//! let port = cfg.server.port.unwrap_or(5000);
//! ```
//!
use crate::core::error::{FaqbotError, Result};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// File name searched for in the working directory and its ancestors.
pub const PROJECT_CONFIG_FILENAME: &str = ".faqbot.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub server: ServerSection,
}

/// The `[server]` table used by `faqbot serve`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// Bind address. Kept as a string so an invalid value can be reported
    /// and replaced with the default instead of failing the whole load.
    pub host: Option<String>,
    pub port: Option<u16>,
    pub enable_cors: Option<bool>,
    /// Verbose request tracing.
    pub debug: Option<bool>,
}

/// Loads configuration from `explicit_path` if given, otherwise from the
/// nearest `.faqbot.toml`. A missing project file yields the defaults; a
/// missing explicit file is an error.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config> {
    let config = match explicit_path {
        Some(path) => {
            if !path.is_file() {
                return Err(anyhow!(FaqbotError::Config(format!(
                    "Config file '{}' does not exist or is not a file.",
                    path.display()
                ))));
            }
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let current_dir =
                std::env::current_dir().context("Failed to get current directory")?;
            match find_project_config_path(&current_dir) {
                Some(path) => {
                    info!("Loading project configuration from: {}", path.display());
                    load_config_from_path(&path)?
                }
                None => {
                    debug!(
                        "No project configuration file ({}) found in current directory or ancestors.",
                        PROJECT_CONFIG_FILENAME
                    );
                    Config::default()
                }
            }
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

/// Walks from `start` towards the filesystem root looking for
/// [`PROJECT_CONFIG_FILENAME`]. The search stops at a repository root.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == Some(0) {
        return Err(anyhow!(FaqbotError::Config(
            "server.port must be between 1 and 65535.".to_string()
        )));
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            debug = true
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.server.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(config.server.port, Some(9000));
        assert_eq!(config.server.enable_cors, None);
        assert_eq!(config.server.debug, Some(true));
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").expect("Failed to parse empty TOML");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(toml::from_str::<Config>("[server]\nworkers = 4\n").is_err());
        assert!(toml::from_str::<Config>("[database]\nurl = \"x\"\n").is_err());
    }

    #[test]
    fn test_find_project_config_in_ancestor() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        let config_path = temp_dir.path().join(PROJECT_CONFIG_FILENAME);
        fs::write(&config_path, "[server]\nport = 9100\n").unwrap();

        assert_eq!(find_project_config_path(&nested), Some(config_path));
    }

    #[test]
    fn test_find_project_config_stops_at_git_root() {
        let temp_dir = tempdir().unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILENAME),
            "[server]\nport = 9100\n",
        )
        .unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        let nested = repo.join("src");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_config_path(&nested), None);
    }

    #[test]
    fn test_load_explicit_path() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[server]\nenable_cors = false\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.server.enable_cors, Some(false));
    }

    #[test]
    fn test_load_explicit_path_missing() {
        let temp_dir = tempdir().unwrap();
        let result = load_config(Some(&temp_dir.path().join("nope.toml")));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_config_rejects_port_zero() {
        let config = Config {
            server: ServerSection {
                port: Some(0),
                ..Default::default()
            },
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("server.port"));
    }
}
