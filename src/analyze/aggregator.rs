use crate::analyze::{ClassifiedIssue, SpilloverReason, SummaryRow};
use std::collections::BTreeMap;

pub fn spilled(classified: &[ClassifiedIssue]) -> Vec<&ClassifiedIssue> {
    classified.iter().filter(|c| c.is_spilled()).collect()
}

/// Folds spilled issues into one row per assignee and reason.
///
/// Issues without a reason are ignored. Rows come out ordered by assignee,
/// then by reason precedence.
pub fn aggregate(classified: &[ClassifiedIssue]) -> Vec<SummaryRow> {
    let mut buckets: BTreeMap<(&str, SpilloverReason), SummaryRow> = BTreeMap::new();
    for item in classified {
        let Some(reason) = item.reason else {
            continue;
        };
        let row = buckets
            .entry((item.issue.assignee.as_str(), reason))
            .or_insert_with(|| SummaryRow::new(&item.issue.assignee, reason));
        row.issues += 1;
        row.story_points += item.issue.story_points;
    }
    buckets.into_values().collect()
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
