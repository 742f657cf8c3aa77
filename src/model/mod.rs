mod datetime;
mod issue;
mod result;
mod sprint;

pub use datetime::parse_timestamp;
pub use issue::{Issue, ASSIGNEE_UNASSIGNED, DEFAULT_STORY_POINTS_FIELD};
pub use result::{Error, Result};
pub use sprint::Sprint;
