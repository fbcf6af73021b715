//! Outcome of probing one tool.

use std::fmt;

/// Placeholder written when a tool's version cannot be determined.
pub const SENTINEL: &str = "N/A";

/// The result of probing a single tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionResult {
    /// The tool answered and its version was extracted.
    Found(String),
    /// The tool is missing, failed, or printed nothing recognizable.
    NotAvailable,
}

impl VersionResult {
    /// Wrap an extracted version, treating blank text as not available.
    ///
    /// Only the first non-blank line is kept: a report line holds one value.
    pub fn from_capture(text: Option<&str>) -> Self {
        match text.and_then(|t| t.lines().map(str::trim).find(|l| !l.is_empty())) {
            Some(version) => Self::Found(version.to_string()),
            None => Self::NotAvailable,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The version, if one was found.
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Found(version) => Some(version),
            Self::NotAvailable => None,
        }
    }

    /// The value written to a report file.
    pub fn as_value(&self) -> &str {
        self.version().unwrap_or(SENTINEL)
    }
}

impl fmt::Display for VersionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_capture_trims() {
        assert_eq!(
            VersionResult::from_capture(Some(" 3.22.1\n")),
            VersionResult::Found("3.22.1".to_string())
        );
    }

    #[test]
    fn from_capture_keeps_first_non_blank_line() {
        assert_eq!(
            VersionResult::from_capture(Some("\n v3.08\r\nwarning: zlib missing\n")),
            VersionResult::Found("v3.08".to_string())
        );
    }

    #[test]
    fn from_capture_blank_is_not_available() {
        assert_eq!(VersionResult::from_capture(Some("  \n")), VersionResult::NotAvailable);
        assert_eq!(VersionResult::from_capture(None), VersionResult::NotAvailable);
    }

    #[test]
    fn not_available_displays_sentinel() {
        assert_eq!(VersionResult::NotAvailable.to_string(), "N/A");
        assert!(!VersionResult::NotAvailable.is_found());
        assert_eq!(VersionResult::NotAvailable.version(), None);
    }

    #[test]
    fn found_displays_version() {
        let result = VersionResult::Found("1.10.1".to_string());
        assert_eq!(result.to_string(), "1.10.1");
        assert!(result.is_found());
    }
}
