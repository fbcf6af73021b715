//! Error types for toolcensus operations.
//!
//! This module defines [`CensusError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CensusError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CensusError::Other`) for unexpected errors
//! - A malformed report or a missing table value aborts the whole run

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for toolcensus operations.
#[derive(Debug, Error)]
pub enum CensusError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A report line has no `key: value` separator.
    #[error("Malformed line {line} in {path}: {content:?}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        content: String,
    },

    /// A host report lacks a value for one of the table columns.
    #[error("Host '{host}' has no value for '{tool}'")]
    MissingValue { host: String, tool: String },

    /// Build and test summaries resolve to the same file.
    #[error("Build and test summaries would both be written to {path}")]
    SameOutput { path: PathBuf },

    /// A probe's extraction pattern does not compile.
    #[error("Invalid pattern for probe '{probe}': {message}")]
    InvalidPattern { probe: String, message: String },

    /// External command could not be run.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for toolcensus operations.
pub type Result<T> = std::result::Result<T, CensusError>;
