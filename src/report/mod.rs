//! Aggregation of per-host probe reports into dashboard tables.
//!
//! # Modules
//!
//! - [`parser`] - `<host>-versions.txt` parsing into [`HostReport`]s
//! - [`set`] - Directory scanning into a [`ReportSet`]
//! - [`role`] - Build/test host classification
//! - [`table`] - Transposition into per-role [`RoleTable`]s
//! - [`render`] - Dashboard markup
//! - [`output`] - Atomic file writes
//! - [`summary`] - The end-to-end aggregation pass
//!
//! # Example
//!
//! ```
//! use toolcensus::report::{
//!     render_markup, role_tables, ColumnOrder, HostReport, MissingValuePolicy, ReportSet,
//!     RoleClassifier,
//! };
//!
//! let set = ReportSet::from_reports([
//!     HostReport::from_pairs("alpha-build", [("CMake", "3.10")]),
//!     HostReport::from_pairs("beta", [("CMake", "3.16")]),
//! ]);
//! let (build, test) = role_tables(&set, &RoleClassifier::default(), ColumnOrder::First);
//! let doc = render_markup(&build, MissingValuePolicy::Fail).unwrap();
//! assert!(doc.contains("value='alpha-build'"));
//! assert_eq!(test.reports().len(), 1);
//! ```

pub mod output;
pub mod parser;
pub mod render;
pub mod role;
pub mod set;
pub mod summary;
pub mod table;

pub use output::{write_atomic, write_atomic_all};
pub use parser::{host_from_file_name, parse_line, parse_report, HostReport, DEFAULT_REPORT_SUFFIX};
pub use render::{escape_attr, render_markup};
pub use role::{Role, RoleClassifier, DEFAULT_BUILD_MARKER};
pub use set::ReportSet;
pub use summary::{
    summarize, SummaryOptions, SummaryOutcome, DEFAULT_BUILD_OUTPUT, DEFAULT_TEST_OUTPUT,
};
pub use table::{role_tables, ColumnOrder, MissingValuePolicy, RoleTable, TableRow};
