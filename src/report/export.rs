use crate::analyze::{ClassifiedIssue, SummaryRow};
use crate::model::Result;
use serde::Serialize;
use std::io;

pub const DETAILED_HEADERS: [&str; 7] = [
    "Sprint",
    "Assignee",
    "Issue Key",
    "Summary",
    "Status",
    "Story Points",
    "Spillover Reason",
];
pub const SUMMARY_HEADERS: [&str; 4] =
    ["Assignee", "Spillover Reason", "Spilled Issues", "Story Points"];

#[derive(Serialize)]
struct DetailedRecord<'a> {
    #[serde(rename = "Sprint")]
    sprint: &'a str,
    #[serde(rename = "Assignee")]
    assignee: &'a str,
    #[serde(rename = "Issue Key")]
    key: &'a str,
    #[serde(rename = "Summary")]
    summary: &'a str,
    #[serde(rename = "Status")]
    status: &'a str,
    #[serde(rename = "Story Points")]
    story_points: f64,
    #[serde(rename = "Spillover Reason")]
    reason: &'a str,
}

impl<'a> From<&'a ClassifiedIssue> for DetailedRecord<'a> {
    fn from(classified: &'a ClassifiedIssue) -> Self {
        Self {
            sprint: &classified.sprint,
            assignee: &classified.issue.assignee,
            key: &classified.issue.key,
            summary: &classified.issue.summary,
            status: &classified.issue.status_category,
            story_points: classified.issue.story_points,
            reason: classified.reason.map(|r| r.label()).unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
struct SummaryRecord<'a> {
    #[serde(rename = "Assignee")]
    assignee: &'a str,
    #[serde(rename = "Spillover Reason")]
    reason: &'static str,
    #[serde(rename = "Spilled Issues")]
    issues: usize,
    #[serde(rename = "Story Points")]
    story_points: f64,
}

impl<'a> From<&'a SummaryRow> for SummaryRecord<'a> {
    fn from(row: &'a SummaryRow) -> Self {
        Self {
            assignee: &row.assignee,
            reason: row.reason.label(),
            issues: row.issues,
            story_points: row.story_points,
        }
    }
}

/// Writes one line per spilled issue.
pub fn write_detailed<W: io::Write>(writer: W, spilled: &[&ClassifiedIssue]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    if spilled.is_empty() {
        csv.write_record(DETAILED_HEADERS)?;
    }
    for classified in spilled {
        csv.serialize(DetailedRecord::from(*classified))?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_summary<W: io::Write>(writer: W, summary: &[SummaryRow]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    if summary.is_empty() {
        csv.write_record(SUMMARY_HEADERS)?;
    }
    for row in summary {
        csv.serialize(SummaryRecord::from(row))?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
