//! External command execution with captured output.

use crate::error::{CensusError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Result of running an external command.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CapturedOutput {
    /// Stdout followed by stderr, for tools that print their version on either.
    pub fn combined(&self) -> String {
        let mut text = self.stdout.clone();
        text.push_str(&self.stderr);
        text
    }
}

#[cfg(test)]
impl CapturedOutput {
    /// Create a success result.
    pub fn success(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: stderr.into(),
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            success: false,
        }
    }
}

/// Run `program` with `args` directly (no shell), capturing both streams.
///
/// Fails only when the process cannot be started; a non-zero exit is
/// reported through [`CapturedOutput::success`].
pub fn capture(program: &Path, args: &[String], cwd: Option<&Path>) -> Result<CapturedOutput> {
    let start = Instant::now();
    let command_line = format_command(&program.to_string_lossy(), args);

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to start {}: {}", command_line, e);
        CensusError::CommandFailed {
            command: command_line.clone(),
            code: None,
        }
    })?;

    tracing::debug!(
        "{} exited with {:?} after {:?}",
        command_line,
        output.status.code(),
        start.elapsed()
    );

    Ok(CapturedOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}

/// Render a command line for logs and error messages.
pub fn format_command(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
