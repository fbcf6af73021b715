//! Show command implementation.
//!
//! The `toolcensus show` command prints the collected host reports, one
//! console table per role, or as JSON with `--json`.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::cli::args::ShowArgs;
use crate::config::{load_merged_config, validate};
use crate::error::{CensusError, Result};
use crate::probe::SENTINEL;
use crate::report::{role_tables, MissingValuePolicy, ReportSet, RoleClassifier, RoleTable};
use crate::ui::theme::CensusTheme;
use crate::ui::{should_use_colors, Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
    args: ShowArgs,
}

impl ShowCommand {
    pub fn new(working_dir: &Path, config_path: Option<&Path>, args: ShowArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_merged_config(&self.working_dir, self.config_path.as_deref())?;
        validate(&config)?;
        let settings = &config.settings;

        let dir = self
            .working_dir
            .join(self.args.dir.as_deref().unwrap_or(Path::new(".")));
        let set = ReportSet::scan(&dir, &settings.report_suffix)?;
        let classifier = RoleClassifier::new(settings.build_marker.clone());
        let order = self.args.column_order.unwrap_or(settings.column_order);
        let (build, test) = role_tables(&set, &classifier, order);

        if self.args.json {
            ui.message(&render_json(&[&build, &test])?);
            return Ok(CommandResult::success());
        }

        let theme = if should_use_colors() {
            CensusTheme::new()
        } else {
            CensusTheme::plain()
        };
        for table in [&build, &test] {
            ui.show_header(&format!("{} ({})", table.role().label(), table.reports().len()));
            if table.is_empty() {
                ui.message(&format!("  {}", theme.dim.apply_to("no hosts")));
            } else {
                ui.message(&render_console(table, &theme)?);
            }
        }

        Ok(CommandResult::success())
    }
}

/// Console table: one row per host, `N/A` cells dimmed.
fn render_console(table: &RoleTable<'_>, theme: &CensusTheme) -> Result<String> {
    let mut headers = vec![table.role().label().to_string()];
    headers.extend(table.columns().iter().cloned());

    let mut console = Table::new(&headers);
    for row in table.rows(MissingValuePolicy::Sentinel)? {
        let mut cells = vec![row.host.to_string()];
        cells.extend(row.values.iter().map(|value| {
            if *value == SENTINEL {
                theme.dim.apply_to(*value).to_string()
            } else {
                value.to_string()
            }
        }));
        console.add_row(&cells);
    }
    Ok(console.render())
}

/// JSON keyed by role, then host, then tool. Reports keep their own tools;
/// no sentinel filling.
fn render_json(tables: &[&RoleTable<'_>]) -> Result<String> {
    let doc: IndexMap<String, IndexMap<&str, &IndexMap<String, String>>> = tables
        .iter()
        .map(|table| {
            let hosts = table
                .reports()
                .iter()
                .map(|report| (report.host(), report.tools()))
                .collect();
            (table.role().to_string(), hosts)
        })
        .collect();

    serde_json::to_string_pretty(&doc).map_err(|e| CensusError::Other(e.into()))
}
