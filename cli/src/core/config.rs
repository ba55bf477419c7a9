//! # tarpack Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for tarpack: loading, merging,
//! validation and access to packing defaults. Configuration lets a project pin its
//! archive layout (prefix, permission overrides, generated files) so that every
//! `tarpack pack` run produces the same archive.
//!
//! ## Architecture
//!
//! - Configuration is loaded from multiple sources in order of precedence.
//! - Paths are expanded (`~` to the home directory).
//! - Configuration is validated before use.
//! - Command-line flags override whatever the configuration says.
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit `--config <PATH>` file. When given, nothing else is read.
//! 2. Project-specific `.tarpack.toml` in the current directory or its ancestors
//!    (the search stops at a directory containing `.git`).
//! 3. User-specific `config.toml` in the platform config directory for tarpack.
//! 4. Default values defined in the code.
//!
//! ## Examples
//!
//! ```toml
//! [pack]
//! prefix = "myapp-1.0"
//! output = "~/dist/myapp.tar"
//! force_executable = false
//! content_mtime = 1700000000
//!
//! [[content]]
//! name = "VERSION"
//! text = "1.0.0"
//! ```
//!
use crate::core::error::{Result, TarpackError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashSet;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub pack: PackDefaults,
    /// Generated files appended after the filesystem entries.
    #[serde(default)]
    pub content: Vec<ContentFile>,
}

/// Defaults for `tarpack pack`. Unset fields fall through to the next source.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PackDefaults {
    /// Internal path prefix for every entry.
    pub prefix: Option<String>,
    /// Archive destination (can use ~). Will be expanded.
    pub output: Option<String>,
    pub force_executable: Option<bool>,
    pub include_root_folder: Option<bool>,
    pub non_recursive: Option<bool>,
    /// Unix timestamp used for generated content instead of the current time.
    pub content_mtime: Option<i64>,
}

/// A file whose content is written from the configuration itself.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ContentFile {
    /// File name, joined under the pack prefix.
    pub name: String,
    /// File content.
    #[serde(default)]
    pub text: String,
    /// Mark the file executable for owner, group and other.
    #[serde(default)]
    pub executable: bool,
}

const PROJECT_CONFIG_FILENAME: &str = ".tarpack.toml";

/// Loads, merges, expands and validates the configuration.
///
/// `explicit` (from `--config`) replaces the user and project lookup entirely.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    expand_config_paths(&mut config).context("Failed to expand paths in configuration")?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "tarpack", "tarpack") {
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
        debug!("No project configuration file (.tarpack.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

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

/// Project values win over user values field by field.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    Config {
        pack: PackDefaults {
            prefix: project.pack.prefix.or(user.pack.prefix),
            output: project.pack.output.or(user.pack.output),
            force_executable: project.pack.force_executable.or(user.pack.force_executable),
            include_root_folder: project
                .pack
                .include_root_folder
                .or(user.pack.include_root_folder),
            non_recursive: project.pack.non_recursive.or(user.pack.non_recursive),
            content_mtime: project.pack.content_mtime.or(user.pack.content_mtime),
        },
        content: if !project.content.is_empty() {
            project.content
        } else {
            user.content
        },
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(output) = config.pack.output.as_mut() {
        *output = shellexpand::tilde(output.as_str()).into_owned();
        debug!("Expanded output path: {}", output);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if let Some(mtime) = config.pack.content_mtime {
        if mtime < 0 {
            return Err(anyhow!(TarpackError::Config(format!(
                "content_mtime must not be negative (got {}).",
                mtime
            ))));
        }
    }
    if config.pack.output.as_deref() == Some("") {
        return Err(anyhow!(TarpackError::Config(
            "output path cannot be empty.".to_string()
        )));
    }
    let mut seen = HashSet::new();
    for content in &config.content {
        if content.name.is_empty() {
            return Err(anyhow!(TarpackError::Config(
                "Content entries must have a non-empty name.".to_string()
            )));
        }
        if !seen.insert(content.name.as_str()) {
            warn!(
                "Content entry '{}' is defined more than once; the archive will contain duplicates.",
                content.name
            );
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}
