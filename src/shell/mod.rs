//! External process execution and platform helpers.

pub mod command;
pub mod path;
pub mod platform;

pub use command::{capture, format_command, CapturedOutput};
pub use path::{is_executable, parse_system_path, resolve_tool_path};
pub use platform::{is_ci, is_ci_with_env};
