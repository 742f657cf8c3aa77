use crate::model::parse_timestamp;
use crate::model::{Error, Result};
use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use tracing::warn;

const CLOSED_STATE: &str = "closed";

#[derive(Debug, Clone, PartialEq)]
pub struct Sprint {
    pub id: u64,
    pub name: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub closed: bool,
}

// Create
impl Sprint {
    pub fn new(
        id: u64,
        name: impl ToString,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        closed: bool,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            start,
            end,
            closed,
        }
    }
}

// Parser
impl Sprint {
    /// Builds a sprint from one raw board record.
    ///
    /// Sprints without a readable start and end date never ran as a time box,
    /// so they yield `Ok(None)` and are left out of the analysis.
    pub fn from_raw(details: &Value) -> Result<Option<Self>> {
        let Some(id) = details["id"].as_u64() else {
            return Err(Error::MissingField {
                record: "sprint",
                field: "id",
            });
        };
        let name = details["name"]
            .as_str()
            .map(String::from)
            .unwrap_or_else(|| format!("Sprint {id}"));

        let start = details["startDate"].as_str().and_then(parse_timestamp);
        let end = details["endDate"].as_str().and_then(parse_timestamp);
        let (Some(start), Some(end)) = (start, end) else {
            warn!(sprint = %name, "skipping sprint without a start or end date");
            return Ok(None);
        };

        let closed = details["state"]
            .as_str()
            .is_some_and(|state| state.eq_ignore_ascii_case(CLOSED_STATE));
        Ok(Some(Self::new(id, name, start, end, closed)))
    }
}

#[cfg(test)]
#[path = "sprint_tests.rs"]
mod tests;
