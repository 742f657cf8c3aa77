use crate::analyze::SpilloverReason;
use crate::model::Issue;

/// An issue of one sprint together with its spillover verdict.
///
/// `reason` is `None` when the issue was done by the end of the sprint.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedIssue {
    pub sprint: String,
    pub issue: Issue,
    pub reason: Option<SpilloverReason>,
}

impl ClassifiedIssue {
    pub fn new(sprint: impl ToString, issue: Issue, reason: Option<SpilloverReason>) -> Self {
        Self {
            sprint: sprint.to_string(),
            issue,
            reason,
        }
    }

    pub fn is_spilled(&self) -> bool {
        self.reason.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub assignee: String,
    pub reason: SpilloverReason,
    pub issues: usize,
    pub story_points: f64,
}

impl SummaryRow {
    pub fn new(assignee: impl ToString, reason: SpilloverReason) -> Self {
        Self {
            assignee: assignee.to_string(),
            reason,
            issues: 0,
            story_points: 0.0,
        }
    }
}
