use super::*;
use crate::analyze::SummaryRow;

fn pivot(rows: &[(&str, SpilloverReason, usize)]) -> PivotTable {
    let summary = rows
        .iter()
        .map(|(assignee, reason, issues)| SummaryRow {
            assignee: assignee.to_string(),
            reason: *reason,
            issues: *issues,
            story_points: 0.0,
        })
        .collect::<Vec<_>>();
    PivotTable::from_summary(&summary)
}

fn bar_of<'a>(chart: &'a str, assignee: &str) -> &'a str {
    let line = chart
        .lines()
        .find(|line| line.starts_with(assignee))
        .unwrap();
    let start = line.find('│').unwrap() + '│'.len_utf8();
    let end = line.rfind('│').unwrap();
    line[start..end].trim_end()
}

#[test]
fn largest_bar_fills_the_width() {
    let chart = render_stacked_bars(&pivot(&[
        ("Ana", SpilloverReason::ScopeAdded, 3),
        ("Ana", SpilloverReason::GeneralDelay, 1),
        ("Ben", SpilloverReason::GeneralDelay, 2),
    ]));

    let ana = bar_of(&chart, "Ana");
    let ben = bar_of(&chart, "Ben");

    assert_eq!(ana.chars().count(), BAR_WIDTH);
    assert_eq!(ana.chars().filter(|c| *c == '█').count(), 38);
    assert_eq!(ana.chars().filter(|c| *c == '#').count(), 12);
    assert_eq!(ben.chars().count(), 25);
    assert!(chart.lines().any(|line| line.starts_with("Ana") && line.ends_with(" 4")));
}

#[test]
fn chart_has_title_and_legend() {
    let chart = render_stacked_bars(&pivot(&[("Ana", SpilloverReason::NoAssignee, 1)]));

    assert_eq!(chart.lines().next(), Some(CHART_TITLE));
    assert_eq!(chart.lines().last(), Some("░ No assignee during sprint"));
}

#[test]
fn empty_chart_says_so() {
    let chart = render_stacked_bars(&PivotTable::default());

    assert_eq!(chart, format!("{CHART_TITLE}\n(no spilled issues)\n"));
}

#[test]
fn chart_has_one_line_per_assignee_between_title_and_legend() {
    let chart = render_stacked_bars(&pivot(&[
        ("Ana", SpilloverReason::ScopeAdded, 1),
        ("Ben", SpilloverReason::CarriedOver, 2),
        ("Cleo", SpilloverReason::CarriedOver, 1),
    ]));

    assert!(chart.ends_with('\n'));
    assert_eq!(chart.lines().count(), 5);
    assert_eq!(chart.lines().filter(|line| line.contains('│')).count(), 3);
}
