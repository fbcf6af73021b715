//! Transposition of a report set into per-role tables.
//!
//! A [`RoleTable`] is one row per host of a role and one column per tool.
//! Which tools become columns is decided by [`ColumnOrder`]; what happens
//! when a host lacks a column is decided by [`MissingValuePolicy`].

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{CensusError, Result};
use crate::probe::SENTINEL;

use super::parser::HostReport;
use super::role::{Role, RoleClassifier};
use super::set::ReportSet;

/// How table columns are chosen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ColumnOrder {
    /// Tools of the first report in the whole set, in its line order.
    /// Both tables share these columns.
    #[default]
    First,
    /// Every tool seen in the role's reports, in first-seen order.
    Union,
    /// Every tool seen in the role's reports, sorted by name.
    Sorted,
}

/// What to do when a host has no value for a column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum MissingValuePolicy {
    /// Abort the run.
    #[default]
    Fail,
    /// Render the `N/A` sentinel.
    Sentinel,
}

/// One resolved table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow<'a> {
    pub host: &'a str,
    pub values: Vec<&'a str>,
}

/// The hosts of one role and the columns to show for them.
#[derive(Debug, Clone)]
pub struct RoleTable<'a> {
    role: Role,
    columns: Vec<String>,
    reports: Vec<&'a HostReport>,
}

impl<'a> RoleTable<'a> {
    /// Select the reports of `role` from `set` and decide the columns.
    pub fn build(
        set: &'a ReportSet,
        role: Role,
        classifier: &RoleClassifier,
        order: ColumnOrder,
    ) -> Self {
        let reports: Vec<&HostReport> = set
            .iter()
            .filter(|report| classifier.classify(report.host()) == role)
            .collect();

        let columns = match order {
            ColumnOrder::First => set
                .first()
                .map(|report| report.tool_names().map(str::to_string).collect())
                .unwrap_or_default(),
            ColumnOrder::Union => union_of(&reports),
            ColumnOrder::Sorted => {
                let mut columns = union_of(&reports);
                columns.sort();
                columns
            }
        };

        Self {
            role,
            columns,
            reports,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Column (tool) names in display order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Reports of this role in set order.
    pub fn reports(&self) -> &[&'a HostReport] {
        &self.reports
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Resolve every cell, applying the missing value policy.
    ///
    /// Tools a host reports that are not columns are dropped.
    pub fn rows(&self, policy: MissingValuePolicy) -> Result<Vec<TableRow<'_>>> {
        self.reports
            .iter()
            .map(|report| {
                let values = self
                    .columns
                    .iter()
                    .map(|tool| match (report.get(tool), policy) {
                        (Some(value), _) => Ok(value),
                        (None, MissingValuePolicy::Sentinel) => Ok(SENTINEL),
                        (None, MissingValuePolicy::Fail) => Err(CensusError::MissingValue {
                            host: report.host().to_string(),
                            tool: tool.clone(),
                        }),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(TableRow {
                    host: report.host(),
                    values,
                })
            })
            .collect()
    }
}

fn union_of(reports: &[&HostReport]) -> Vec<String> {
    let names: IndexSet<&str> = reports
        .iter()
        .flat_map(|report| report.tool_names())
        .collect();
    names.into_iter().map(str::to_string).collect()
}

/// Build the build-role and test-role tables for a set.
pub fn role_tables<'a>(
    set: &'a ReportSet,
    classifier: &RoleClassifier,
    order: ColumnOrder,
) -> (RoleTable<'a>, RoleTable<'a>) {
    (
        RoleTable::build(set, Role::Build, classifier, order),
        RoleTable::build(set, Role::Test, classifier, order),
    )
}
