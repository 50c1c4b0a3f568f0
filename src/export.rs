//! Grouping export: CSV table in, one JSON file per state out.

use crate::error::Result;
use crate::input::{StateGroups, read_csv};
use crate::output::write_state;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Indent the JSON documents
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ExportOptions {
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// A state file written by an export
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenState {
    pub state: String,
    pub cities: usize,
    pub path: PathBuf,
}

/// Files written by an export, in write order
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub states: Vec<WrittenState>,
}

impl ExportSummary {
    pub fn city_count(&self) -> usize {
        self.states.iter().map(|s| s.cities).sum()
    }
}

/// Read `input` and write `<output_dir>/<state>.json` for every state.
///
/// The whole table is parsed before the first file is written, so a
/// malformed row leaves the output directory untouched. A write failure
/// aborts the export; files written before it remain.
pub fn export(input: &Path, output_dir: &Path) -> Result<ExportSummary> {
    export_with_options(input, output_dir, &ExportOptions::default())
}

pub fn export_with_options(
    input: &Path,
    output_dir: &Path,
    options: &ExportOptions,
) -> Result<ExportSummary> {
    let groups = read_csv(input)?;
    write_groups(&groups, output_dir, options)
}

/// Write already grouped waypoints, one file per state in map order.
pub fn write_groups(
    groups: &StateGroups,
    output_dir: &Path,
    options: &ExportOptions,
) -> Result<ExportSummary> {
    let mut summary = ExportSummary::default();

    for (state, cities) in groups {
        let path = write_state(output_dir, state, cities, options.pretty)?;
        summary.states.push(WrittenState {
            state: state.clone(),
            cities: cities.len(),
            path,
        });
    }

    Ok(summary)
}
