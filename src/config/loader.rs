//! Configuration file discovery and loading.
//!
//! Every config file is optional. Files that exist are deep-merged in
//! priority order (later overrides earlier):
//!
//! 1. User global config (`~/.toolcensus/config.yml`)
//! 2. Project config (`.toolcensus/config.yml` in the working directory)
//! 3. An explicit `--config` file

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::merger::merge_configs;
use crate::config::schema::CensusConfig;
use crate::error::{CensusError, Result};

/// Name of the per-user and per-project config directory.
pub const CONFIG_DIR: &str = ".toolcensus";
/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Paths to configuration files in merge order.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// `~/.toolcensus/config.yml`
    pub user_global: Option<PathBuf>,

    /// `.toolcensus/config.yml` under the project root
    pub project: Option<PathBuf>,

    /// File passed with `--config`
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for `project_root`.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: dirs::home_dir().and_then(|home| existing(&home)),
            project: existing(project_root),
            explicit: None,
        }
    }

    /// Add an explicit config file, loaded last.
    pub fn with_explicit(mut self, path: Option<&Path>) -> Self {
        self.explicit = path.map(Path::to_path_buf);
        self
    }

    /// All config paths in merge order.
    pub fn all(&self) -> Vec<&Path> {
        [&self.user_global, &self.project, &self.explicit]
            .into_iter()
            .flatten()
            .map(PathBuf::as_path)
            .collect()
    }
}

fn existing(base: &Path) -> Option<PathBuf> {
    let path = base.join(CONFIG_DIR).join(CONFIG_FILE);
    path.is_file().then_some(path)
}

/// Parse YAML content into a [`CensusConfig`].
pub fn parse_config(content: &str, source_path: &Path) -> Result<CensusConfig> {
    serde_yaml::from_str(content).map_err(|e| CensusError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as a raw YAML value, for merging.
///
/// An empty file loads as an empty mapping.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CensusError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CensusError::Io(e)
        }
    })?;

    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| CensusError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(if value.is_null() {
        serde_yaml::Value::Mapping(Default::default())
    } else {
        value
    })
}

/// Load the layered configuration that applies to `project_root`.
///
/// Without any config file this yields the defaults. An `explicit` path
/// that does not exist is an error.
pub fn load_merged_config(project_root: &Path, explicit: Option<&Path>) -> Result<CensusConfig> {
    let paths = ConfigPaths::discover(project_root).with_explicit(explicit);
    load_from_paths(&paths)
}

/// Load and merge the files listed in `paths`.
pub fn load_from_paths(paths: &ConfigPaths) -> Result<CensusConfig> {
    let mut configs = Vec::new();
    for path in paths.all() {
        tracing::debug!("Loading config from {}", path.display());
        configs.push(load_config_value(path)?);
    }

    let merged = merge_configs(&configs);
    let source = paths
        .all()
        .last()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    serde_yaml::from_value(merged).map_err(|e| CensusError::ConfigParseError {
        path: source,
        message: format!("Failed to parse merged config: {}", e),
    })
}
