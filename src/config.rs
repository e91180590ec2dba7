//! Configuration for where the library database lives.
//!
//! Configuration sources (highest priority first):
//! 1. `--database` flag or the LIBRIS_DATABASE environment variable
//! 2. Config file (.libris/config.yaml)
//! 3. Defaults (./database.db)
//!
//! Config file discovery:
//! - Searches current directory and parents for .libris/config.yaml
//! - Paths in the config file are relative to the directory holding .libris/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Database file used when nothing else is configured
pub const DEFAULT_DATABASE: &str = "database.db";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Database file (relative to the project root)
    pub database: Option<String>,
}

/// Resolved configuration with a usable database path
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Path to the SQLite database file
    pub database: PathBuf,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching `start` and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".libris").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a configured path: `~` expands to the home directory, relative
/// paths are joined onto `base`
fn resolve_path(base: &Path, path_str: &str) -> Result<PathBuf> {
    if let Some(rest) = path_str.strip_prefix("~/") {
        let home = dirs::home_dir().context("Failed to determine home directory")?;
        return Ok(home.join(rest));
    }

    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(base.join(path))
    }
}

/// Resolve configuration, searching for a config file from `cwd` upwards.
///
/// `database_override` is the value of the `--database` flag (clap fills it
/// from LIBRIS_DATABASE when the flag is absent).
pub fn resolve(cwd: &Path, database_override: Option<&Path>) -> Result<ResolvedConfig> {
    let config_file = find_config_file(cwd);

    let database = if let Some(path) = database_override {
        resolve_path(cwd, &path.to_string_lossy())?
    } else if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // Base directory is the parent of .libris/ (i.e. grandparent of config.yaml)
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(cwd);

        match config.storage.database {
            Some(ref db) => resolve_path(base_dir, db)?,
            None => cwd.join(DEFAULT_DATABASE),
        }
    } else {
        cwd.join(DEFAULT_DATABASE)
    };

    Ok(ResolvedConfig {
        database,
        config_file,
    })
}

/// Resolve configuration relative to the process working directory
pub fn load(database_override: Option<&Path>) -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    resolve(&cwd, database_override)
}
