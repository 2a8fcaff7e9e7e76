//! # filecrud Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the defaults the command-line front end
//! applies when a flag isn't given: the update delimiter and position, the create
//! mode, the delete mode, and an optional base directory for relative file names.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.filecrud.toml` in the current directory or its ancestors
//!    (the search stops at a directory containing `.git`)
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/filecrud/config.toml` on Linux)
//! 3. Default values defined in the code
//!
//! Mode strings are validated with the same `FromStr` impls the handler uses, so a
//! typo in a config file fails early with `FileCrudError::Config`.
//!
//! ## Examples
//!
//! ```toml
//! [update]
//! delimiter = ", "
//! position = "append"
//!
//! [create]
//! mode = "keep"
//!
//! [files]
//! base_dir = "~/notes"
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config()?;
//! let position: UpdatePosition = cfg.update.position.parse()?;
//! ```
//!
use crate::core::error::{FileCrudError, Result};
use crate::core::handler::{CreateMode, DeleteMode, UpdatePosition, DEFAULT_DELIMITER};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub update: UpdateConfig,
    #[serde(default)]
    pub create: CreateConfig,
    #[serde(default)]
    pub delete: DeleteConfig,
    #[serde(default)]
    pub files: FilesConfig,
}

/// Defaults for `filecrud update`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UpdateConfig {
    /// Delimiter placed between the new elements.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// One of `prepend`, `append`, `overwrite`.
    #[serde(default = "default_position")]
    pub position: String,
}

/// Defaults for `filecrud create`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CreateConfig {
    /// One of `rename`, `recreate`, `keep`.
    #[serde(default = "default_create_mode")]
    pub mode: String,
}

/// Defaults for `filecrud delete`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DeleteConfig {
    /// One of `delete`, `clear`.
    #[serde(default = "default_delete_mode")]
    pub mode: String,
}

/// File resolution settings.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FilesConfig {
    /// Directory relative file arguments resolve against (can use ~). Will be expanded.
    pub base_dir: Option<String>,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            position: default_position(),
        }
    }
}

impl Default for CreateConfig {
    fn default() -> Self {
        Self {
            mode: default_create_mode(),
        }
    }
}

impl Default for DeleteConfig {
    fn default() -> Self {
        Self {
            mode: default_delete_mode(),
        }
    }
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}
fn default_position() -> String {
    "overwrite".to_string()
}
fn default_create_mode() -> String {
    "rename".to_string()
}
fn default_delete_mode() -> String {
    "delete".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".filecrud.toml";

/// Loads the effective configuration: defaults, then user config, then project config.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "FileCrud", "filecrud") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.filecrud.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the root looking for `.filecrud.toml`, stopping at a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
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

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.update.delimiter = if project_cfg.update.delimiter != default_delimiter() {
        project_cfg.update.delimiter
    } else {
        user.update.delimiter
    };
    merged.update.position = if project_cfg.update.position != default_position() {
        project_cfg.update.position
    } else {
        user.update.position
    };
    merged.create.mode = if project_cfg.create.mode != default_create_mode() {
        project_cfg.create.mode
    } else {
        user.create.mode
    };
    merged.delete.mode = if project_cfg.delete.mode != default_delete_mode() {
        project_cfg.delete.mode
    } else {
        user.delete.mode
    };
    merged.files.base_dir = project_cfg.files.base_dir.or(user.files.base_dir);
    merged
}

fn expand_config_paths(config: &mut Config) {
    if let Some(base_dir) = config.files.base_dir.as_mut() {
        *base_dir = shellexpand::tilde(base_dir.as_str()).into_owned();
        debug!("Expanded base directory: {}", base_dir);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    config
        .update
        .position
        .parse::<UpdatePosition>()
        .map_err(|e| anyhow!(FileCrudError::Config(e.to_string())))?;
    config
        .create
        .mode
        .parse::<CreateMode>()
        .map_err(|e| anyhow!(FileCrudError::Config(e.to_string())))?;
    config
        .delete
        .mode
        .parse::<DeleteMode>()
        .map_err(|e| anyhow!(FileCrudError::Config(e.to_string())))?;

    if let Some(base_dir) = &config.files.base_dir {
        let base = Path::new(base_dir);
        if !base.exists() {
            warn!("Configured base directory '{}' does not exist.", base.display());
        } else if !base.is_dir() {
            return Err(anyhow!(FileCrudError::Config(format!(
                "Configured base_dir '{}' exists but is not a directory.",
                base.display()
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}

impl Config {
    /// The base directory as a path, if configured.
    pub fn base_dir(&self) -> Option<&Path> {
        self.files.base_dir.as_deref().map(Path::new)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [update]
            delimiter = ", "
            position = "append"

            [delete]
            mode = "clear"

            [files]
            base_dir = "~/notes"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.update.delimiter, ", ");
        assert_eq!(config.update.position, "append");
        assert_eq!(config.create.mode, "rename"); // Default
        assert_eq!(config.delete.mode, "clear");
        assert_eq!(config.files.base_dir.as_deref(), Some("~/notes")); // Not yet expanded
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").expect("Failed to parse TOML");
        assert_eq!(config, Config::default());
        assert_eq!(config.update.delimiter, " ");
        assert_eq!(config.update.position, "overwrite");
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[update]\ncolour = \"red\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = Config {
            update: UpdateConfig {
                delimiter: ";".into(),
                position: "append".into(),
            },
            files: FilesConfig {
                base_dir: Some("/user/base".into()),
            },
            ..Default::default()
        };
        let project = Config {
            update: UpdateConfig {
                position: "prepend".into(),
                ..Default::default()
            },
            create: CreateConfig {
                mode: "keep".into(),
            },
            ..Default::default()
        };

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.update.delimiter, ";"); // project left it at the default
        assert_eq!(merged.update.position, "prepend");
        assert_eq!(merged.create.mode, "keep");
        assert_eq!(merged.delete.mode, "delete");
        assert_eq!(merged.base_dir(), Some(Path::new("/user/base")));
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            files: FilesConfig {
                base_dir: Some("~/filecrud_test".into()),
            },
            ..Default::default()
        };
        expand_config_paths(&mut config);
        let expanded = config.files.base_dir.unwrap();
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("filecrud_test"));
    }

    #[test]
    fn test_validate_config_invalid_mode() {
        let config = Config {
            update: UpdateConfig {
                position: "sideways".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FileCrudError>(),
            Some(FileCrudError::Config(_))
        ));
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn test_validate_config_base_dir_is_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("not_a_dir");
        fs::write(&file_path, "").unwrap();

        let config = Config {
            files: FilesConfig {
                base_dir: Some(file_path.to_string_lossy().to_string()),
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("is not a directory"));
    }

    #[test]
    fn test_find_project_config_path() -> Result<()> {
        let root = tempdir()?;
        fs::create_dir(root.path().join(".git"))?;
        let nested = root.path().join("a/b");
        fs::create_dir_all(&nested)?;

        assert_eq!(find_project_config_path(&nested), None);

        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "")?;
        assert_eq!(
            find_project_config_path(&nested),
            Some(root.path().join(PROJECT_CONFIG_FILENAME))
        );
        Ok(())
    }
}
