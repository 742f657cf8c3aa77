pub mod chart;
pub mod export;
pub mod markdown;
pub mod pivot;

pub use chart::render_stacked_bars;
pub use markdown::MarkdownReport;
pub use pivot::PivotTable;

use crate::analyze::{aggregate, spilled, ClassifiedIssue, SummaryRow};
use crate::model::Result;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DETAILED_CSV: &str = "jira_spillover_detailed.csv";
pub const SUMMARY_CSV: &str = "jira_spillover_summary.csv";
pub const MARKDOWN_REPORT: &str = "jira_spillover_report.md";

/// Everything the run produced, ready to be rendered.
#[derive(Debug, Clone)]
pub struct SpilloverReport {
    pub sprints: usize,
    pub classified: Vec<ClassifiedIssue>,
    pub summary: Vec<SummaryRow>,
    pub pivot: PivotTable,
}

impl SpilloverReport {
    pub fn new(sprints: usize, classified: Vec<ClassifiedIssue>) -> Self {
        let summary = aggregate(&classified);
        let pivot = PivotTable::from_summary(&summary);
        Self {
            sprints,
            classified,
            summary,
            pivot,
        }
    }

    pub fn chart(&self) -> String {
        render_stacked_bars(&self.pivot)
    }

    /// Writes both CSV exports and the markdown report into `dir`.
    pub fn write_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;

        let detailed = dir.join(DETAILED_CSV);
        export::write_detailed(
            BufWriter::new(File::create(&detailed)?),
            &spilled(&self.classified),
        )?;

        let summary = dir.join(SUMMARY_CSV);
        export::write_summary(BufWriter::new(File::create(&summary)?), &self.summary)?;

        let markdown = dir.join(MARKDOWN_REPORT);
        fs::write(&markdown, self.report_render()?)?;

        let written = vec![detailed, summary, markdown];
        for path in &written {
            info!(path = %path.display(), "saved report");
        }
        Ok(written)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
