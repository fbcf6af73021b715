//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Running with no subcommand summarizes.

pub mod completions;
pub mod dispatcher;
pub mod probe;
pub mod show;
pub mod summarize;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
