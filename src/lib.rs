//! toolcensus - build tool version census for CI farms.
//!
//! Each build or test host runs `toolcensus probe` to record the versions
//! of its installed build tools in `<host>-versions.txt`. Once the reports
//! are gathered in one directory, `toolcensus summarize` turns them into two
//! dashboard tables: `build_summary.xml` and `test_summary.xml`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Tool version probes
//! - [`report`] - Report parsing, role tables, and dashboard markup
//! - [`shell`] - External command execution
//! - [`ui`] - Spinners, tables, and terminal output
//!
//! # Example
//!
//! ```
//! use toolcensus::report::{parse_report, RoleClassifier, Role};
//! use std::path::Path;
//!
//! let report = parse_report(
//!     "alpha-build",
//!     "CMake: 3.10\nNinja: N/A\n",
//!     Path::new("alpha-build-versions.txt"),
//! )
//! .unwrap();
//! assert_eq!(report.get("CMake"), Some("3.10"));
//! assert_eq!(RoleClassifier::default().classify(report.host()), Role::Build);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod shell;
pub mod ui;

pub use error::{CensusError, Result};
