//! Tool version probes.
//!
//! A probe asks one installed tool for its version. Probes run through a
//! [`CommandRunner`] so tests can script tool output instead of invoking
//! real binaries.
//!
//! # Example
//!
//! ```
//! use toolcensus::probe::ProbeRegistry;
//!
//! let registry = ProbeRegistry::builtin().unwrap();
//! assert_eq!(registry.names()[0], "Conan");
//! ```

pub mod battery;
pub mod prober;
pub mod registry;
pub mod result;
pub mod runner;

pub use battery::{output_path, run_battery, ProbeReport, DEFAULT_PROBE_OUTPUT};
pub use prober::{CMakeProjectProbe, CommandProbe, Extractor, Prober};
pub use registry::{builtin_specs, merge_specs, ProbeRegistry, ProbeSpec};
pub use result::{VersionResult, SENTINEL};
pub use runner::{CommandRunner, Invocation, SystemRunner};
