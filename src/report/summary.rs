//! The aggregation pass: scan, parse, classify, render, write.

use std::path::PathBuf;

use crate::error::{CensusError, Result};

use super::output::write_atomic_all;
use super::render::render_markup;
use super::role::RoleClassifier;
use super::set::ReportSet;
use super::table::{role_tables, ColumnOrder, MissingValuePolicy};

/// Default name of the build host summary.
pub const DEFAULT_BUILD_OUTPUT: &str = "build_summary.xml";
/// Default name of the test host summary.
pub const DEFAULT_TEST_OUTPUT: &str = "test_summary.xml";

/// Inputs of one aggregation run.
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    /// Directory holding the probe output files.
    pub dir: PathBuf,
    /// File name suffix of probe output files.
    pub report_suffix: String,
    pub build_output: PathBuf,
    pub test_output: PathBuf,
    pub classifier: RoleClassifier,
    pub column_order: ColumnOrder,
    pub missing_values: MissingValuePolicy,
}

/// What an aggregation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOutcome {
    pub hosts: usize,
    pub build_hosts: usize,
    pub test_hosts: usize,
    pub columns: usize,
    pub build_output: PathBuf,
    pub test_output: PathBuf,
}

/// Run the aggregation.
///
/// Both documents are rendered and staged before either file is replaced,
/// so a malformed report, a missing value or an unwritable target leaves
/// no output behind.
pub fn summarize(options: &SummaryOptions) -> Result<SummaryOutcome> {
    if options.build_output == options.test_output {
        return Err(CensusError::SameOutput {
            path: options.build_output.clone(),
        });
    }

    let set = ReportSet::scan(&options.dir, &options.report_suffix)?;
    tracing::info!(
        "Found {} host report(s) in {}",
        set.len(),
        options.dir.display()
    );

    let (build, test) = role_tables(&set, &options.classifier, options.column_order);
    let build_doc = render_markup(&build, options.missing_values)?;
    let test_doc = render_markup(&test, options.missing_values)?;

    write_atomic_all(&[
        (options.build_output.as_path(), build_doc.as_str()),
        (options.test_output.as_path(), test_doc.as_str()),
    ])?;

    Ok(SummaryOutcome {
        hosts: set.len(),
        build_hosts: build.reports().len(),
        test_hosts: test.reports().len(),
        columns: build.columns().len().max(test.columns().len()),
        build_output: options.build_output.clone(),
        test_output: options.test_output.clone(),
    })
}
