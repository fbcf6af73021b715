//! The seam between probes and the operating system.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{CensusError, Result};
use crate::shell::{capture, format_command, parse_system_path, resolve_tool_path, CapturedOutput};

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from an argv list; `None` when the list is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_command(&self.program, &self.args))
    }
}

/// Runs external commands on behalf of probes.
pub trait CommandRunner {
    /// Run `invocation`, optionally in `cwd`, capturing its output.
    ///
    /// Returns an error when the program can't be found or started.
    fn run(&self, invocation: &Invocation, cwd: Option<&Path>) -> Result<CapturedOutput>;
}

/// Runs commands on the real system, resolving programs on PATH first.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    path: Vec<PathBuf>,
}

impl SystemRunner {
    /// Runner using the current PATH.
    pub fn new() -> Self {
        Self::with_path(parse_system_path())
    }

    /// Runner using an explicit search path.
    pub fn with_path(path: Vec<PathBuf>) -> Self {
        Self { path }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation, cwd: Option<&Path>) -> Result<CapturedOutput> {
        let program = resolve_tool_path(&invocation.program, &self.path).ok_or_else(|| {
            tracing::debug!("{} not found on PATH", invocation.program);
            CensusError::CommandFailed {
                command: invocation.to_string(),
                code: None,
            }
        })?;
        capture(&program, &invocation.args, cwd)
    }
}
