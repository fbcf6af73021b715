//! Probe command implementation.
//!
//! The `toolcensus probe` command queries the installed build tools and
//! writes one `Name: version` line per tool.

use std::path::{Path, PathBuf};

use crate::cli::args::ProbeArgs;
use crate::config::{load_merged_config, validate, ProbeConfig};
use crate::error::Result;
use crate::probe::{output_path, run_battery, CommandRunner, ProbeRegistry, SystemRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The probe command implementation.
pub struct ProbeCommand {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
    args: ProbeArgs,
    runner: Box<dyn CommandRunner>,
}

impl ProbeCommand {
    pub fn new(working_dir: &Path, config_path: Option<&Path>, args: ProbeArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
            runner: Box::new(SystemRunner::new()),
        }
    }

    /// Replace the runner used to invoke tools.
    pub fn with_runner(mut self, runner: Box<dyn CommandRunner>) -> Self {
        self.runner = runner;
        self
    }
}

impl Command for ProbeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_merged_config(&self.working_dir, self.config_path.as_deref())?;
        validate(&config)?;

        let custom = config.probes.iter().map(ProbeConfig::to_spec).collect();
        let registry =
            ProbeRegistry::with_custom(custom)?.filter(&self.args.only, &self.args.skip);

        if self.args.list {
            for name in registry.names() {
                ui.message(name);
            }
            return Ok(CommandResult::success());
        }

        if registry.is_empty() {
            ui.warning("No probes selected");
        }

        ui.show_header("Probing build tools");
        let report = run_battery(&registry, self.runner.as_ref(), ui);

        let path = self.working_dir.join(output_path(
            self.args.output.as_deref(),
            self.args.host.as_deref(),
            &config.settings.report_suffix,
        ));
        report.write_to(&path)?;

        ui.success(&format!(
            "Wrote {} ({} of {} tools found)",
            path.display(),
            report.found_count(),
            report.len()
        ));

        Ok(CommandResult::success())
    }
}
