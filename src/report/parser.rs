//! Parsing of per-host probe output files.
//!
//! A report file is named `<host>-versions.txt` and holds one
//! `<Tool>: <value>` line per probed tool. Lines without a separator are
//! fatal: a broken probe file means the probe itself is broken.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{CensusError, Result};

/// File name suffix that marks a probe output file.
pub const DEFAULT_REPORT_SUFFIX: &str = "-versions.txt";

/// Decoded tool → version mapping for one host.
///
/// Tools keep the order of the lines they were read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostReport {
    host: String,
    tools: IndexMap<String, String>,
}

impl HostReport {
    /// Create an empty report for a host.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            tools: IndexMap::new(),
        }
    }

    /// Build a report from `(tool, value)` pairs, in order.
    pub fn from_pairs<I, K, V>(host: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut report = Self::new(host);
        for (tool, value) in pairs {
            report.insert(tool, value);
        }
        report
    }

    /// Record a tool value. A repeated tool keeps its first position.
    pub fn insert(&mut self, tool: impl Into<String>, value: impl Into<String>) {
        self.tools.insert(tool.into(), value.into());
    }

    /// The host this report belongs to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Value recorded for a tool.
    pub fn get(&self, tool: &str) -> Option<&str> {
        self.tools.get(tool).map(String::as_str)
    }

    /// Tool names in file order.
    pub fn tool_names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    /// The underlying ordered mapping.
    pub fn tools(&self) -> &IndexMap<String, String> {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Extract the host name from a report file name.
///
/// Returns `None` when the name doesn't end in `suffix` or the host part
/// would be empty.
pub fn host_from_file_name<'a>(file_name: &'a str, suffix: &str) -> Option<&'a str> {
    file_name
        .strip_suffix(suffix)
        .filter(|host| !host.is_empty())
}

/// Split one report line into `(tool, value)`.
///
/// The split happens at the first `:`; spaces after it are skipped. Returns
/// `None` when the line has no `:` at all.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (tool, value) = line.split_once(':')?;
    Some((tool, value.trim_start_matches(' ')))
}

/// Parse report file content for `host`.
///
/// `source` is only used for error messages.
pub fn parse_report(host: &str, content: &str, source: &Path) -> Result<HostReport> {
    let mut report = HostReport::new(host);

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (tool, value) = parse_line(line).ok_or_else(|| CensusError::MalformedLine {
            path: source.to_path_buf(),
            line: index + 1,
            content: line.to_string(),
        })?;
        report.insert(tool, value);
    }

    Ok(report)
}

/// Read and parse one report file.
pub fn load_report(path: &Path, host: &str) -> Result<HostReport> {
    let content = fs::read_to_string(path)?;
    parse_report(host, &content, path)
}
