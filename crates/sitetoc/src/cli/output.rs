//! Rendering of the run summary.

use std::path::Path;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use sitetoc_index::RunReport;

/// Builds the summary table for a completed run.
///
/// Output paths are shown relative to `root` when they lie beneath it.
pub fn summary_table(report: &RunReport, root: &Path) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Index", "Documents", "Output", "Status"]);

    for entry in &report.entries {
        let output = entry.output.strip_prefix(root).unwrap_or(&entry.output);
        let status = if entry.written { "written" } else { "dry run" };
        table.add_row(vec![
            Cell::new(&entry.label),
            Cell::new(entry.documents),
            Cell::new(output.display()),
            Cell::new(status),
        ]);
    }

    table
}
