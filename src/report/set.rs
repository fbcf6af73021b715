//! The set of host reports found in one directory.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::Result;

use super::parser::{host_from_file_name, load_report, HostReport};

/// Every recognized report in a directory, keyed by host name.
///
/// Hosts keep discovery order. Discovery visits directory entries sorted by
/// file name so repeated runs over the same directory see the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSet {
    reports: IndexMap<String, HostReport>,
}

impl ReportSet {
    /// Scan `dir` for files named `<host><suffix>` and parse each one.
    ///
    /// Non-matching entries are skipped with a log line. The first malformed
    /// report aborts the scan.
    pub fn scan(dir: &Path, suffix: &str) -> Result<Self> {
        let mut entries = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        let mut reports = IndexMap::new();
        for entry in entries {
            let path = entry.path();
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                tracing::info!("Skipping {}", path.display());
                continue;
            };

            if !path.is_file() {
                tracing::debug!("Skipping {} (not a file)", name);
                continue;
            }

            let Some(host) = host_from_file_name(name, suffix) else {
                tracing::info!("Skipping {}", name);
                continue;
            };

            let report = load_report(&path, host)?;
            tracing::debug!("Loaded {} tools for {}", report.len(), host);
            reports.insert(host.to_string(), report);
        }

        Ok(Self { reports })
    }

    /// Build a set from already-parsed reports, in the given order.
    pub fn from_reports(reports: impl IntoIterator<Item = HostReport>) -> Self {
        Self {
            reports: reports
                .into_iter()
                .map(|report| (report.host().to_string(), report))
                .collect(),
        }
    }

    /// Report for one host.
    pub fn get(&self, host: &str) -> Option<&HostReport> {
        self.reports.get(host)
    }

    /// The first report in discovery order.
    pub fn first(&self) -> Option<&HostReport> {
        self.reports.values().next()
    }

    /// Reports in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &HostReport> {
        self.reports.values()
    }

    /// Host names in discovery order.
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.reports.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
