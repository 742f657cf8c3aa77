use crate::model::parse_timestamp;
use crate::model::{Error, Result};
use chrono::{DateTime, FixedOffset};
use serde_json::Value;

/// Display name used when an issue has nobody assigned.
pub const ASSIGNEE_UNASSIGNED: &str = "Unassigned";
/// Custom field that most tracker instances use for story points.
pub const DEFAULT_STORY_POINTS_FIELD: &str = "customfield_10016";

const STATUS_CATEGORY_DONE: &str = "done";

/// An issue as seen at the end of a sprint.
///
/// Missing fields are already replaced by their defaults here: an empty
/// summary and status category, [`ASSIGNEE_UNASSIGNED`], zero story points,
/// and `None` for timestamps that are absent or unreadable.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub status_category: String,
    pub assignee: String,
    pub story_points: f64,
    pub created: Option<DateTime<FixedOffset>>,
    pub updated: Option<DateTime<FixedOffset>>,
}

// Create
impl Issue {
    pub fn new(
        key: impl ToString,
        summary: impl ToString,
        status_category: impl ToString,
        assignee: impl ToString,
        story_points: f64,
        created: Option<DateTime<FixedOffset>>,
        updated: Option<DateTime<FixedOffset>>,
    ) -> Self {
        Self {
            key: key.to_string(),
            summary: summary.to_string(),
            status_category: status_category.to_string(),
            assignee: assignee.to_string(),
            story_points,
            created,
            updated,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status_category.eq_ignore_ascii_case(STATUS_CATEGORY_DONE)
    }

    pub fn is_unassigned(&self) -> bool {
        self.assignee == ASSIGNEE_UNASSIGNED
    }
}

// Parser
impl Issue {
    pub fn from_raw(details: &Value, story_points_field: &str) -> Result<Self> {
        let Some(key) = details["key"].as_str() else {
            return Err(Error::MissingField {
                record: "issue",
                field: "key",
            });
        };
        let fields = &details["fields"];

        let summary = fields["summary"].as_str().unwrap_or_default();
        let status_category = fields["status"]["statusCategory"]["name"]
            .as_str()
            .unwrap_or_default();
        let assignee = fields["assignee"]["displayName"]
            .as_str()
            .unwrap_or(ASSIGNEE_UNASSIGNED);
        let story_points = fields[story_points_field].as_f64().unwrap_or(0.0);
        let created = fields["created"].as_str().and_then(parse_timestamp);
        let updated = fields["updated"].as_str().and_then(parse_timestamp);

        Ok(Self::new(
            key,
            summary,
            status_category,
            assignee,
            story_points,
            created,
            updated,
        ))
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
