//! Summarize command implementation.
//!
//! The `toolcensus summarize` command turns a directory of host reports
//! into `build_summary.xml` and `test_summary.xml`.

use std::path::{Path, PathBuf};

use crate::cli::args::SummarizeArgs;
use crate::config::{load_merged_config, validate, CensusConfig};
use crate::error::Result;
use crate::report::{summarize, RoleClassifier, SummaryOptions};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The summarize command implementation.
pub struct SummarizeCommand {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
    args: SummarizeArgs,
}

impl SummarizeCommand {
    pub fn new(working_dir: &Path, config_path: Option<&Path>, args: SummarizeArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Merge flags over configuration. Relative paths resolve against the
    /// working directory.
    pub fn options(&self, config: &CensusConfig) -> SummaryOptions {
        let settings = &config.settings;
        let resolve = |path: &Path| self.working_dir.join(path);

        SummaryOptions {
            dir: resolve(self.args.dir.as_deref().unwrap_or(Path::new("."))),
            report_suffix: settings.report_suffix.clone(),
            build_output: resolve(
                self.args
                    .build_output
                    .as_deref()
                    .unwrap_or(Path::new(&settings.build_output)),
            ),
            test_output: resolve(
                self.args
                    .test_output
                    .as_deref()
                    .unwrap_or(Path::new(&settings.test_output)),
            ),
            classifier: RoleClassifier::new(settings.build_marker.clone()),
            column_order: self.args.column_order.unwrap_or(settings.column_order),
            missing_values: self.args.missing_values.unwrap_or(settings.missing_values),
        }
    }
}

impl Command for SummarizeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_merged_config(&self.working_dir, self.config_path.as_deref())?;
        validate(&config)?;

        let options = self.options(&config);
        tracing::debug!("Summary options: {:?}", options);

        let outcome = summarize(&options)?;

        if outcome.hosts == 0 {
            ui.warning(&format!(
                "No host reports found in {}; writing empty tables",
                options.dir.display()
            ));
        }
        if ui.output_mode().shows_details() {
            ui.message(&format!(
                "{} columns, {} build host(s), {} test host(s)",
                outcome.columns, outcome.build_hosts, outcome.test_hosts
            ));
        }
        ui.success(&format!(
            "Wrote {} ({} host(s)) and {} ({} host(s))",
            outcome.build_output.display(),
            outcome.build_hosts,
            outcome.test_output.display(),
            outcome.test_hosts
        ));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CensusError;
    use crate::report::{ColumnOrder, MissingValuePolicy};
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    fn setup(reports: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (name, content) in reports {
            fs::write(temp.path().join(name), content).unwrap();
        }
        temp
    }

    fn run(temp: &TempDir, args: SummarizeArgs) -> (Result<CommandResult>, MockUI) {
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        let result = SummarizeCommand::new(temp.path(), None, args).execute(&mut ui);
        (result, ui)
    }

    #[test]
    fn writes_both_summaries() {
        let temp = setup(&[
            ("alpha-build-versions.txt", "CMake: 3.10\n"),
            ("beta-versions.txt", "CMake: 3.16\n"),
        ]);

        let (result, ui) = run(&temp, SummarizeArgs::default());

        assert!(result.unwrap().success);
        let build = fs::read_to_string(temp.path().join("build_summary.xml")).unwrap();
        let test = fs::read_to_string(temp.path().join("test_summary.xml")).unwrap();
        assert!(build.contains("value='alpha-build'"));
        assert!(test.contains("value='beta'"));
        assert!(ui.has_success("build_summary.xml"));
        assert!(ui.has_message("1 build host(s), 1 test host(s)"));
    }

    #[test]
    fn flags_override_config() {
        let temp = setup(&[
            ("alpha-build-versions.txt", "CMake: 3.10\nNinja: 1.10\n"),
            ("beta-versions.txt", "CMake: 3.16\n"),
        ]);
        let config_dir = temp.path().join(".toolcensus");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("config.yml"),
            "settings:\n  build_output: from-config.xml\n  missing_values: fail\n",
        )
        .unwrap();

        let args = SummarizeArgs {
            missing_values: Some(MissingValuePolicy::Sentinel),
            ..Default::default()
        };
        let (result, _) = run(&temp, args);

        assert!(result.unwrap().success);
        assert!(temp.path().join("from-config.xml").exists());
        let test = fs::read_to_string(temp.path().join("test_summary.xml")).unwrap();
        assert!(test.contains("<td value='N/A'/>"));
    }

    #[test]
    fn options_resolve_against_working_dir() {
        let cmd = SummarizeCommand::new(
            Path::new("/work"),
            None,
            SummarizeArgs {
                dir: Some(PathBuf::from("reports")),
                test_output: Some(PathBuf::from("/abs/test.xml")),
                column_order: Some(ColumnOrder::Sorted),
                ..Default::default()
            },
        );
        let options = cmd.options(&CensusConfig::default());

        assert_eq!(options.dir, PathBuf::from("/work/reports"));
        assert_eq!(options.build_output, PathBuf::from("/work/build_summary.xml"));
        assert_eq!(options.test_output, PathBuf::from("/abs/test.xml"));
        assert_eq!(options.column_order, ColumnOrder::Sorted);
        assert_eq!(options.missing_values, MissingValuePolicy::Fail);
        assert_eq!(options.classifier.build_marker(), "-build");
    }

    #[test]
    fn malformed_report_fails_without_output() {
        let temp = setup(&[
            ("alpha-build-versions.txt", "CMake: 3.10\n"),
            ("beta-versions.txt", "garbage\n"),
        ]);

        let (result, _) = run(&temp, SummarizeArgs::default());

        assert!(matches!(result, Err(CensusError::MalformedLine { .. })));
        assert!(!temp.path().join("build_summary.xml").exists());
        assert!(!temp.path().join("test_summary.xml").exists());
    }

    #[test]
    fn empty_directory_warns() {
        let temp = setup(&[]);

        let (result, ui) = run(&temp, SummarizeArgs::default());

        assert!(result.unwrap().success);
        assert!(ui.has_warning("No host reports found"));
        assert_eq!(
            fs::read_to_string(temp.path().join("build_summary.xml")).unwrap(),
            "<table sorttable=\"yes\"><tr>\n  <td fontattribute='bold' value='Build Slave'/>\n</tr>\n</table>"
        );
    }

    #[test]
    fn same_output_flags_are_rejected() {
        let temp = setup(&[
            ("alpha-build-versions.txt", "CMake: 3.10\n"),
            ("beta-versions.txt", "CMake: 3.16\n"),
        ]);

        let args = SummarizeArgs {
            build_output: Some(PathBuf::from("out.xml")),
            test_output: Some(PathBuf::from("out.xml")),
            ..Default::default()
        };
        let (result, _) = run(&temp, args);

        assert!(matches!(result, Err(CensusError::SameOutput { .. })));
        assert!(!temp.path().join("out.xml").exists());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let temp = setup(&[]);
        let config = temp.path().join("bad.yml");
        fs::write(
            &config,
            "settings:\n  build_output: same.xml\n  test_output: same.xml\n",
        )
        .unwrap();

        let mut ui = MockUI::new();
        let result =
            SummarizeCommand::new(temp.path(), Some(&config), SummarizeArgs::default()).execute(&mut ui);

        assert!(matches!(result, Err(CensusError::ConfigValidationError { .. })));
    }
}
