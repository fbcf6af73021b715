//! Running the whole probe battery for one host.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::report::write_atomic;
use crate::ui::UserInterface;

use super::registry::ProbeRegistry;
use super::result::VersionResult;
use super::runner::CommandRunner;

/// Output file name when neither `--output` nor `--host` is given.
pub const DEFAULT_PROBE_OUTPUT: &str = "version.txt";

/// Results of one battery run, in probe order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    entries: Vec<(String, VersionResult)>,
}

impl ProbeReport {
    pub fn push(&mut self, name: impl Into<String>, result: VersionResult) {
        self.entries.push((name.into(), result));
    }

    pub fn entries(&self) -> &[(String, VersionResult)] {
        &self.entries
    }

    /// Number of tools whose version was found.
    pub fn found_count(&self) -> usize {
        self.entries.iter().filter(|(_, r)| r.is_found()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Report file content: one `Name: value` line per probe.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(name, result)| format!("{}: {}\n", name, result))
            .collect()
    }

    /// Write the report in one go.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        write_atomic(path, &self.render())
    }
}

/// Where the probe report goes.
///
/// An explicit `output` wins; otherwise `--host NAME` gives
/// `NAME<suffix>`, and the fallback is [`DEFAULT_PROBE_OUTPUT`].
pub fn output_path(output: Option<&Path>, host: Option<&str>, suffix: &str) -> PathBuf {
    match (output, host) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(host)) => PathBuf::from(format!("{}{}", host, suffix)),
        (None, None) => PathBuf::from(DEFAULT_PROBE_OUTPUT),
    }
}

/// Run every probe in `registry`, showing one spinner per tool.
pub fn run_battery(
    registry: &ProbeRegistry,
    runner: &dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> ProbeReport {
    let mut report = ProbeReport::default();

    for probe in registry.probes() {
        let mut spinner = ui.start_spinner(&format!("Probing {}...", probe.name()));
        let result = probe.probe(runner);

        match &result {
            VersionResult::Found(version) => {
                tracing::debug!("{} = {}", probe.name(), version);
                spinner.finish_success(&format!("{} {}", probe.name(), version));
            }
            VersionResult::NotAvailable => {
                tracing::debug!("{} not available", probe.name());
                spinner.finish_skipped(&format!("{} not available", probe.name()));
            }
        }

        report.push(probe.name(), result);
    }

    report
}
