//! Host role classification.

use std::fmt;

/// Substring that marks a build host.
pub const DEFAULT_BUILD_MARKER: &str = "-build";

/// Role of a host on the CI farm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Hosts that compile.
    Build,
    /// Every other host.
    Test,
}

impl Role {
    /// Both roles, in output order.
    pub const ALL: [Role; 2] = [Role::Build, Role::Test];

    /// Label of the leading header cell in a summary table.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Build => "Build Slave",
            Role::Test => "Test Slave",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Build => write!(f, "build"),
            Role::Test => write!(f, "test"),
        }
    }
}

/// Two-way split of host names by a marker substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleClassifier {
    build_marker: String,
}

impl RoleClassifier {
    pub fn new(build_marker: impl Into<String>) -> Self {
        Self {
            build_marker: build_marker.into(),
        }
    }

    /// Classify a host: containing the marker means build, anything else test.
    pub fn classify(&self, host: &str) -> Role {
        if host.contains(&self.build_marker) {
            Role::Build
        } else {
            Role::Test
        }
    }

    pub fn build_marker(&self) -> &str {
        &self.build_marker
    }
}

impl Default for RoleClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_BUILD_MARKER)
    }
}
