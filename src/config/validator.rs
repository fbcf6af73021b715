//! Configuration validation rules.
//!
//! - Settings must name a usable suffix, marker and two distinct outputs
//! - Probes need a unique, non-empty name
//! - Probes need a command or a CMake project
//! - Probe patterns must compile

use std::collections::HashSet;

use regex::Regex;

use crate::config::schema::{CensusConfig, ProbeConfig};
use crate::error::{CensusError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Probe name if the error is probe-specific
    pub probe: Option<String>,
}

impl ValidationError {
    fn settings(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
            probe: None,
        }
    }

    fn probe(rule: &str, probe: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
            probe: Some(probe.to_string()),
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &CensusConfig) -> Vec<ValidationError> {
    let mut errors = validate_settings(config);
    errors.extend(validate_probes(&config.probes));
    errors
}

fn validate_settings(config: &CensusConfig) -> Vec<ValidationError> {
    let settings = &config.settings;
    let mut errors = Vec::new();

    if settings.report_suffix.is_empty() {
        errors.push(ValidationError::settings(
            "empty-suffix",
            "settings.report_suffix must not be empty",
        ));
    }

    if settings.build_marker.is_empty() {
        errors.push(ValidationError::settings(
            "empty-marker",
            "settings.build_marker must not be empty",
        ));
    }

    if settings.build_output.is_empty() || settings.test_output.is_empty() {
        errors.push(ValidationError::settings(
            "empty-output",
            "settings.build_output and settings.test_output must not be empty",
        ));
    } else if settings.build_output == settings.test_output {
        errors.push(ValidationError::settings(
            "same-output",
            format!(
                "Build and test summaries would both be written to '{}'",
                settings.build_output
            ),
        ));
    }

    errors
}

fn validate_probes(probes: &[ProbeConfig]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for probe in probes {
        let name = probe.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::settings(
                "unnamed-probe",
                "Every probe needs a name",
            ));
            continue;
        }

        if name.contains(':') {
            errors.push(ValidationError::probe(
                "colon-in-name",
                name,
                format!("Probe name '{}' must not contain ':'", name),
            ));
        }

        if !seen.insert(name.to_string()) {
            errors.push(ValidationError::probe(
                "duplicate-probe",
                name,
                format!("Probe '{}' is defined more than once", name),
            ));
        }

        if probe.command.is_empty() && probe.cmake_project.is_none() {
            errors.push(ValidationError::probe(
                "missing-command",
                name,
                format!("Probe '{}' must have either 'command' or 'cmake_project'", name),
            ));
        }

        if let Some(pattern) = &probe.pattern {
            if let Err(e) = Regex::new(pattern) {
                errors.push(ValidationError::probe(
                    "invalid-pattern",
                    name,
                    format!("Probe '{}' has an invalid pattern: {}", name, e),
                ));
            }
        }
    }

    errors
}

/// Validate a configuration, failing with every problem found.
pub fn validate(config: &CensusConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(CensusError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
