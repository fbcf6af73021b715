//! Visual theme and styling.

use console::Style;

/// Console styles used across commands.
#[derive(Debug, Clone)]
pub struct CensusTheme {
    /// Found versions and completed writes (green).
    pub success: Style,
    /// Warnings (orange).
    pub warning: Style,
    /// Errors (red bold).
    pub error: Style,
    /// Secondary text, such as `N/A` cells.
    pub dim: Style,
    /// Bold text.
    pub highlight: Style,
    /// Headers (magenta bold).
    pub header: Style,
    /// Key labels in key-value displays.
    pub key: Style,
}

impl Default for CensusTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CensusTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            key: Style::new().bold(),
        }
    }

    /// A theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            key: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = CensusTheme::plain().format_success("CMake 3.22.1");
        assert_eq!(msg, "✓ CMake 3.22.1");
    }

    #[test]
    fn theme_formats_skipped() {
        let msg = CensusTheme::plain().format_skipped("Mono not available");
        assert_eq!(msg, "○ Mono not available");
    }

    #[test]
    fn theme_formats_error() {
        let msg = CensusTheme::plain().format_error("Malformed line");
        assert!(msg.starts_with("✗"));
        assert!(msg.contains("Malformed line"));
    }

    #[test]
    fn theme_formats_warning() {
        let msg = CensusTheme::plain().format_warning("No reports");
        assert!(msg.contains("⚠"));
    }

    #[test]
    fn plain_header_is_unstyled() {
        assert_eq!(CensusTheme::plain().format_header("Build hosts"), "Build hosts");
    }
}
