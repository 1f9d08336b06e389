use crate::cherry_pick::notifier::DEFAULT_DOCS_URL;
use crate::domain::label::DEFAULT_PICK_INTO_PATTERN;
use crate::domain::{PickIntoLabel, StaticCatalog};
use crate::error::{ReleaseToolsError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Represents the complete configuration for release-tools.
///
/// Contains label naming, documentation links, process status flags and the
/// catalog of known versions.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub labels: LabelsConfig,

    #[serde(default)]
    pub docs: DocsConfig,

    #[serde(default)]
    pub status: StatusConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

fn default_pick_into() -> String {
    DEFAULT_PICK_INTO_PATTERN.to_string()
}

fn default_release_process_url() -> String {
    DEFAULT_DOCS_URL.to_string()
}

/// Label naming used in `/unlabel` quick actions.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LabelsConfig {
    #[serde(default = "default_pick_into")]
    pub pick_into: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        LabelsConfig {
            pick_into: default_pick_into(),
        }
    }
}

impl LabelsConfig {
    pub fn pick_into_label(&self) -> PickIntoLabel {
        PickIntoLabel::new(self.pick_into.clone())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DocsConfig {
    #[serde(default = "default_release_process_url")]
    pub release_process_url: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        DocsConfig {
            release_process_url: default_release_process_url(),
        }
    }
}

/// Process flags as written in the config file, before env overrides.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusConfig {
    #[serde(default)]
    pub security_release: bool,

    #[serde(default)]
    pub dry_run: bool,
}

/// Known release versions, used when none are given on the command line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub versions: Vec<String>,
}

impl CatalogConfig {
    pub fn to_catalog(&self) -> StaticCatalog {
        StaticCatalog::new(self.versions.clone())
    }
}

/// Immutable process flags for one run.
///
/// Resolved once at startup and passed to whatever needs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReleaseStatus {
    pub security_release: bool,
    pub dry_run: bool,
}

impl ReleaseStatus {
    /// Config values, overridden by `SECURITY` and `TEST` when those are set
    pub fn resolve(config: &StatusConfig) -> Self {
        ReleaseStatus {
            security_release: env_flag("SECURITY").unwrap_or(config.security_release),
            dry_run: env_flag("TEST").unwrap_or(config.dry_run),
        }
    }
}

/// `Some(true)` for "true"/"1"/"yes", `Some(false)` for any other value,
/// `None` when unset.
fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().map(|value| {
        matches!(
            value.trim().to_lowercase().as_str(),
            "true" | "1" | "yes"
        )
    })
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasetools.toml` in current directory
/// 3. `.releasetools.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new("./releasetools.toml").exists() {
        PathBuf::from("./releasetools.toml")
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releasetools.toml");
        if config_path.exists() {
            config_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path)?;
    toml::from_str(&config_str)
        .map_err(|err| ReleaseToolsError::config(format!("{}: {}", path.display(), err)))
}
