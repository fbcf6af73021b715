//! Configuration schema definitions.
//!
//! These structs map to the YAML configuration file format.

use serde::{Deserialize, Serialize};

use crate::probe::{Invocation, ProbeSpec};
use crate::report::{
    ColumnOrder, MissingValuePolicy, DEFAULT_BUILD_MARKER, DEFAULT_BUILD_OUTPUT,
    DEFAULT_REPORT_SUFFIX, DEFAULT_TEST_OUTPUT,
};

/// Root configuration structure for `config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CensusConfig {
    /// Global settings
    pub settings: Settings,

    /// Custom probes, appended to the built-in battery or replacing a
    /// built-in probe of the same name
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub probes: Vec<ProbeConfig>,
}

/// Settings for report discovery and summary output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// File name suffix of probe reports
    pub report_suffix: String,

    /// Substring marking a build host
    pub build_marker: String,

    /// Build host summary path
    pub build_output: String,

    /// Test host summary path
    pub test_output: String,

    /// How table columns are chosen
    pub column_order: ColumnOrder,

    /// What to do with cells a host has no value for
    pub missing_values: MissingValuePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            report_suffix: DEFAULT_REPORT_SUFFIX.to_string(),
            build_marker: DEFAULT_BUILD_MARKER.to_string(),
            build_output: DEFAULT_BUILD_OUTPUT.to_string(),
            test_output: DEFAULT_TEST_OUTPUT.to_string(),
            column_order: ColumnOrder::default(),
            missing_values: MissingValuePolicy::default(),
        }
    }
}

/// A probe declared in configuration.
///
/// ```yaml
/// probes:
///   - name: Rust
///     command: [rustc, --version]
///     pattern: 'rustc ([0-9.]+)'
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Tool name as written in the report
    pub name: String,

    /// Program and arguments
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,

    /// Fallback commands, tried in order when `command` yields nothing
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<Vec<String>>,

    /// Extraction regex; the whole output is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Capture group holding the version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<usize>,

    /// Read stderr as well as stdout
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub merge_stderr: bool,

    /// `CMakeLists.txt` content of a scratch project to configure instead
    /// of running `command`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmake_project: Option<String>,
}

impl ProbeConfig {
    /// Convert into a probe spec.
    pub fn to_spec(&self) -> ProbeSpec {
        let invocations = std::iter::once(&self.command)
            .chain(&self.alternatives)
            .filter_map(|argv| Invocation::from_argv(argv))
            .collect();

        ProbeSpec {
            name: self.name.clone(),
            invocations,
            pattern: self.pattern.clone(),
            group: self.group,
            merge_stderr: self.merge_stderr,
            cmake_project: self.cmake_project.clone(),
        }
    }
}
