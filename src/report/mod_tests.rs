use super::*;
use crate::analyze::SpilloverReason;
use crate::model::Issue;

fn sample_report() -> SpilloverReport {
    let classified = vec![
        ClassifiedIssue::new(
            "Sprint 1",
            Issue::new("K-1", "Ledger sync", "To Do", "Ana", 3.0, None, None),
            Some(SpilloverReason::NoAssignee),
        ),
        ClassifiedIssue::new(
            "Sprint 1",
            Issue::new("K-2", "Audit log", "Done", "Ana", 5.0, None, None),
            None,
        ),
    ];
    SpilloverReport::new(1, classified)
}

#[test]
fn new_aggregates_and_pivots() {
    let report = sample_report();

    assert_eq!(report.summary.len(), 1);
    assert_eq!(report.summary[0].issues, 1);
    assert_eq!(report.pivot.rows["Ana"], vec![1]);
    assert!(report.chart().starts_with(chart::CHART_TITLE));
}

#[test]
fn write_files_saves_exports_and_markdown() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("reports");

    let written = sample_report().write_files(&out).unwrap();

    assert_eq!(
        written,
        vec![out.join(DETAILED_CSV), out.join(SUMMARY_CSV), out.join(MARKDOWN_REPORT)]
    );
    let detailed = fs::read_to_string(out.join(DETAILED_CSV)).unwrap();
    assert_eq!(detailed.lines().count(), 2);
    assert!(detailed.contains("K-1"));
    assert!(!detailed.contains("K-2"));

    let summary = fs::read_to_string(out.join(SUMMARY_CSV)).unwrap();
    assert_eq!(
        summary.lines().nth(1),
        Some("Ana,No assignee during sprint,1,3.0")
    );
    assert!(out.join(MARKDOWN_REPORT).exists());
}
