//! Probe implementations.
//!
//! Every probe follows the same recipe: run a command, pick the version out
//! of its output, and fall back to [`VersionResult::NotAvailable`] on any
//! failure. [`CommandProbe`] runs a tool directly; [`CMakeProjectProbe`]
//! configures a throwaway CMake project and reads what CMake found.

use std::fs;

use regex::Regex;
use tempfile::TempDir;

use super::result::VersionResult;
use super::runner::{CommandRunner, Invocation};

/// A single tool version probe.
pub trait Prober {
    /// Tool name as written in the report (e.g. "CMake").
    fn name(&self) -> &str;

    /// Query the tool through `runner`.
    fn probe(&self, runner: &dyn CommandRunner) -> VersionResult;
}

/// How a version is picked out of command output.
#[derive(Debug, Clone)]
pub enum Extractor {
    /// The whole output, trimmed to its first non-blank line.
    WholeOutput,
    /// One capture group of the first match.
    Pattern { regex: Regex, group: usize },
}

impl Extractor {
    /// Pattern extractor; `group` defaults to 1 when the pattern has groups.
    pub fn pattern(regex: Regex, group: Option<usize>) -> Self {
        let group = group.unwrap_or(if regex.captures_len() > 1 { 1 } else { 0 });
        Self::Pattern { regex, group }
    }

    pub fn extract(&self, output: &str) -> VersionResult {
        match self {
            Extractor::WholeOutput => VersionResult::from_capture(Some(output)),
            Extractor::Pattern { regex, group } => VersionResult::from_capture(
                regex
                    .captures(output)
                    .and_then(|caps| caps.get(*group))
                    .map(|m| m.as_str()),
            ),
        }
    }
}

/// Probe that runs the tool itself.
///
/// Invocations are alternatives tried in order (e.g. `qmake` then
/// `qmake-qt5`); the first one that yields a version wins.
#[derive(Debug, Clone)]
pub struct CommandProbe {
    name: String,
    invocations: Vec<Invocation>,
    extractor: Extractor,
    merge_stderr: bool,
}

impl CommandProbe {
    pub fn new(
        name: impl Into<String>,
        invocations: Vec<Invocation>,
        extractor: Extractor,
        merge_stderr: bool,
    ) -> Self {
        Self {
            name: name.into(),
            invocations,
            extractor,
            merge_stderr,
        }
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    fn probe_one(&self, runner: &dyn CommandRunner, invocation: &Invocation) -> VersionResult {
        let output = match runner.run(invocation, None) {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("{}: {}", self.name, e);
                return VersionResult::NotAvailable;
            }
        };

        if !output.success {
            tracing::debug!(
                "{}: `{}` exited with {:?}",
                self.name,
                invocation,
                output.exit_code
            );
            return VersionResult::NotAvailable;
        }

        if self.merge_stderr {
            self.extractor.extract(&output.combined())
        } else {
            self.extractor.extract(&output.stdout)
        }
    }
}

impl Prober for CommandProbe {
    fn name(&self) -> &str {
        &self.name
    }

    fn probe(&self, runner: &dyn CommandRunner) -> VersionResult {
        self.invocations
            .iter()
            .map(|invocation| self.probe_one(runner, invocation))
            .find(VersionResult::is_found)
            .unwrap_or(VersionResult::NotAvailable)
    }
}

/// Probe that configures a scratch CMake project and reads CMake's output.
///
/// Used for things only the build system can see, such as the Boost
/// installation or the MSVC compiler version.
#[derive(Debug, Clone)]
pub struct CMakeProjectProbe {
    name: String,
    cmakelists: String,
    extractor: Extractor,
}

impl CMakeProjectProbe {
    pub fn new(name: impl Into<String>, cmakelists: impl Into<String>, extractor: Extractor) -> Self {
        Self {
            name: name.into(),
            cmakelists: cmakelists.into(),
            extractor,
        }
    }

    fn configure(&self, runner: &dyn CommandRunner) -> crate::error::Result<VersionResult> {
        let scratch = TempDir::new()?;
        fs::write(scratch.path().join("CMakeLists.txt"), &self.cmakelists)?;

        let output = runner.run(&Invocation::new("cmake", ["."]), Some(scratch.path()))?;
        if !output.success {
            tracing::debug!("{}: cmake exited with {:?}", self.name, output.exit_code);
            return Ok(VersionResult::NotAvailable);
        }
        Ok(self.extractor.extract(&output.stdout))
    }
}

impl Prober for CMakeProjectProbe {
    fn name(&self) -> &str {
        &self.name
    }

    fn probe(&self, runner: &dyn CommandRunner) -> VersionResult {
        self.configure(runner).unwrap_or_else(|e| {
            tracing::debug!("{}: {}", self.name, e);
            VersionResult::NotAvailable
        })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! A scripted [`CommandRunner`] for probe tests.

    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    use crate::error::{CensusError, Result};
    use crate::probe::runner::{CommandRunner, Invocation};
    use crate::shell::CapturedOutput;

    #[derive(Default)]
    pub struct FakeRunner {
        responses: HashMap<String, CapturedOutput>,
        pub calls: RefCell<Vec<(String, Option<PathBuf>)>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Respond to the exact command line `command` with `output`.
        pub fn respond(mut self, command: &str, output: CapturedOutput) -> Self {
            self.responses.insert(command.to_string(), output);
            self
        }

        pub fn stdout(self, command: &str, stdout: &str) -> Self {
            self.respond(command, CapturedOutput::success(stdout, ""))
        }

        pub fn stderr(self, command: &str, stderr: &str) -> Self {
            self.respond(command, CapturedOutput::success("", stderr))
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, invocation: &Invocation, cwd: Option<&Path>) -> Result<CapturedOutput> {
            let command = invocation.to_string();
            self.calls
                .borrow_mut()
                .push((command.clone(), cwd.map(Path::to_path_buf)));
            self.responses
                .get(&command)
                .cloned()
                .ok_or(CensusError::CommandFailed {
                    command,
                    code: None,
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeRunner;
    use super::*;
    use crate::shell::CapturedOutput;

    fn cmake_probe() -> CommandProbe {
        CommandProbe::new(
            "CMake",
            vec![Invocation::new("cmake", ["--version"])],
            Extractor::pattern(Regex::new(r"cmake version (.*)").unwrap(), None),
            false,
        )
    }

    #[test]
    fn pattern_extracts_first_group() {
        let runner = FakeRunner::new().stdout(
            "cmake --version",
            "cmake version 3.22.1\n\nCMake suite maintained and supported by Kitware.\n",
        );
        assert_eq!(
            cmake_probe().probe(&runner),
            VersionResult::Found("3.22.1".to_string())
        );
    }

    #[test]
    fn missing_tool_is_not_available() {
        let runner = FakeRunner::new();
        assert_eq!(cmake_probe().probe(&runner), VersionResult::NotAvailable);
    }

    #[test]
    fn non_zero_exit_is_not_available() {
        let runner = FakeRunner::new().respond(
            "cmake --version",
            CapturedOutput::failure(Some(1), "cmake version 3.22.1", ""),
        );
        assert_eq!(cmake_probe().probe(&runner), VersionResult::NotAvailable);
    }

    #[test]
    fn unmatched_output_is_not_available() {
        let runner = FakeRunner::new().stdout("cmake --version", "something else\n");
        assert_eq!(cmake_probe().probe(&runner), VersionResult::NotAvailable);
    }

    #[test]
    fn whole_output_is_trimmed() {
        let probe = CommandProbe::new(
            "Ninja",
            vec![Invocation::new("ninja", ["--version"])],
            Extractor::WholeOutput,
            false,
        );
        let runner = FakeRunner::new().stdout("ninja --version", "1.10.1\n");
        assert_eq!(probe.probe(&runner), VersionResult::Found("1.10.1".to_string()));
    }

    #[test]
    fn stderr_is_only_read_when_merged() {
        let pattern = || {
            Extractor::pattern(
                Regex::new(r#"(java|openjdk) version "([0-9._]*).*""#).unwrap(),
                Some(2),
            )
        };
        let runner = FakeRunner::new().stderr(
            "java -version",
            "openjdk version \"11.0.20\" 2023-07-18\nOpenJDK Runtime Environment\n",
        );

        let merged = CommandProbe::new(
            "Java",
            vec![Invocation::new("java", ["-version"])],
            pattern(),
            true,
        );
        let stdout_only = CommandProbe::new(
            "Java",
            vec![Invocation::new("java", ["-version"])],
            pattern(),
            false,
        );
        assert_eq!(merged.probe(&runner), VersionResult::Found("11.0.20".to_string()));
        assert_eq!(stdout_only.probe(&runner), VersionResult::NotAvailable);
    }

    #[test]
    fn alternatives_are_tried_in_order() {
        let probe = CommandProbe::new(
            "Qt",
            vec![
                Invocation::new("qmake", ["-version"]),
                Invocation::new("qmake-qt5", ["-version"]),
            ],
            Extractor::pattern(Regex::new(r"Using Qt version ([.0-9]*)").unwrap(), None),
            false,
        );
        let runner = FakeRunner::new().stdout(
            "qmake-qt5 -version",
            "QMake version 3.1\nUsing Qt version 5.15.3 in /usr/lib64\n",
        );
        assert_eq!(probe.probe(&runner), VersionResult::Found("5.15.3".to_string()));
        assert_eq!(runner.calls.borrow().len(), 2);
    }

    #[test]
    fn first_successful_alternative_stops_search() {
        let probe = CommandProbe::new(
            "Python",
            vec![
                Invocation::new("python3", ["--version"]),
                Invocation::new("python", ["--version"]),
            ],
            Extractor::pattern(Regex::new(r"Python ([0-9][^\s]*)").unwrap(), None),
            true,
        );
        let runner = FakeRunner::new()
            .stdout("python3 --version", "Python 3.10.12\n")
            .stderr("python --version", "Python 2.7.18\n");
        assert_eq!(probe.probe(&runner), VersionResult::Found("3.10.12".to_string()));
        assert_eq!(runner.calls.borrow().len(), 1);
    }

    #[test]
    fn pattern_without_groups_uses_whole_match() {
        let extractor = Extractor::pattern(Regex::new(r"[0-9]+\.[0-9]+").unwrap(), None);
        assert_eq!(
            extractor.extract("makensis v3.08"),
            VersionResult::Found("3.08".to_string())
        );
    }

    #[test]
    fn cmake_project_probe_runs_in_scratch_dir() {
        let probe = CMakeProjectProbe::new(
            "MSVC",
            "project(foo CXX)\n",
            Extractor::pattern(
                Regex::new(r"The CXX compiler identification is MSVC ([.0-9]*)").unwrap(),
                None,
            ),
        );
        let runner = FakeRunner::new().stdout(
            "cmake .",
            "-- The CXX compiler identification is MSVC 19.29.30148.0\n-- Configuring done\n",
        );

        assert_eq!(
            probe.probe(&runner),
            VersionResult::Found("19.29.30148.0".to_string())
        );

        let calls = runner.calls.borrow();
        let scratch = calls[0].1.as_ref().unwrap();
        assert!(!scratch.exists(), "scratch dir should be removed");
    }

    #[test]
    fn cmake_project_probe_without_cmake_is_not_available() {
        let probe = CMakeProjectProbe::new("Boost", "project(foo CXX)\n", Extractor::WholeOutput);
        assert_eq!(probe.probe(&FakeRunner::new()), VersionResult::NotAvailable);
    }
}
