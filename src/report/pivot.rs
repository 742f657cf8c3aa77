use crate::analyze::{SpilloverReason, SummaryRow};
use indexmap::IndexMap;
use itertools::Itertools;

/// Spilled issue counts with assignees as rows and reasons as columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PivotTable {
    pub reasons: Vec<SpilloverReason>,
    pub rows: IndexMap<String, Vec<usize>>,
}

impl PivotTable {
    /// Only reasons that occur become columns; missing cells are zero.
    pub fn from_summary(summary: &[SummaryRow]) -> Self {
        let reasons = summary
            .iter()
            .map(|row| row.reason)
            .unique()
            .sorted()
            .collect::<Vec<_>>();
        let mut rows = summary
            .iter()
            .map(|row| row.assignee.as_str())
            .unique()
            .sorted()
            .map(|assignee| (assignee.to_string(), vec![0; reasons.len()]))
            .collect::<IndexMap<_, _>>();

        for row in summary {
            let column = reasons.iter().position(|reason| *reason == row.reason);
            if let (Some(column), Some(cells)) = (column, rows.get_mut(row.assignee.as_str())) {
                cells[column] += row.issues;
            }
        }
        Self { reasons, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn max_total(&self) -> usize {
        self.rows
            .values()
            .map(|cells| cells.iter().sum::<usize>())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "pivot_tests.rs"]
mod tests;
