use crate::analyze::ClassifiedIssue;
use crate::model::{Issue, Sprint};
use chrono::{DateTime, FixedOffset};
use std::fmt;

/// Story points from which an unfinished issue counts as underestimated.
pub const UNDERESTIMATED_STORY_POINTS: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpilloverReason {
    ScopeAdded,
    Underestimated,
    CarriedOver,
    NoAssignee,
    GeneralDelay,
}

impl SpilloverReason {
    pub fn label(&self) -> &'static str {
        match self {
            SpilloverReason::ScopeAdded => "Scope added mid-sprint",
            SpilloverReason::Underestimated => "Underestimated effort",
            SpilloverReason::CarriedOver => "Carried over work post-sprint",
            SpilloverReason::NoAssignee => "No assignee during sprint",
            SpilloverReason::GeneralDelay => "General delay / blocked",
        }
    }
}

impl fmt::Display for SpilloverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Start and end of the sprint an issue is judged against.
#[derive(Debug, Clone, Copy)]
pub struct SprintWindow {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

type Predicate = fn(&Issue, &SprintWindow) -> bool;

/// Spillover heuristics in precedence order; the first rule that holds wins.
pub const RULES: [(SpilloverReason, Predicate); 5] = [
    (SpilloverReason::ScopeAdded, created_after_start),
    (SpilloverReason::Underestimated, underestimated),
    (SpilloverReason::CarriedOver, updated_after_end),
    (SpilloverReason::NoAssignee, unassigned),
    (SpilloverReason::GeneralDelay, any_issue),
];

fn created_after_start(issue: &Issue, window: &SprintWindow) -> bool {
    issue.created.is_some_and(|created| created > window.start)
}

fn underestimated(issue: &Issue, _: &SprintWindow) -> bool {
    issue.story_points >= UNDERESTIMATED_STORY_POINTS
}

fn updated_after_end(issue: &Issue, window: &SprintWindow) -> bool {
    issue.updated.is_some_and(|updated| updated > window.end)
}

fn unassigned(issue: &Issue, _: &SprintWindow) -> bool {
    issue.is_unassigned()
}

fn any_issue(_: &Issue, _: &SprintWindow) -> bool {
    true
}

/// Explains why `issue` was still open when the sprint closed.
///
/// Returns `None` for issues whose status category is done. Timestamps that
/// could not be read never count as "after", so such issues fall through to
/// the later rules.
pub fn classify(
    issue: &Issue,
    sprint_start: DateTime<FixedOffset>,
    sprint_end: DateTime<FixedOffset>,
) -> Option<SpilloverReason> {
    if issue.is_done() {
        return None;
    }
    let window = SprintWindow {
        start: sprint_start,
        end: sprint_end,
    };
    RULES
        .iter()
        .find(|(_, applies)| applies(issue, &window))
        .map(|(reason, _)| *reason)
}

pub fn classify_sprint(sprint: &Sprint, issues: Vec<Issue>) -> Vec<ClassifiedIssue> {
    issues
        .into_iter()
        .map(|issue| {
            let reason = classify(&issue, sprint.start, sprint.end);
            ClassifiedIssue::new(&sprint.name, issue, reason)
        })
        .collect()
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
