//! Configuration loading, merging and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use toolcensus::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".toolcensus");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "settings:\n  build_marker: \"-ci\"\n").unwrap();
//!
//! let config = load_merged_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.settings.build_marker, "-ci");
//! ```

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    load_config_value, load_from_paths, load_merged_config, parse_config, ConfigPaths,
    CONFIG_DIR, CONFIG_FILE,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{CensusConfig, ProbeConfig, Settings};
pub use validator::{validate, validate_config, ValidationError};
