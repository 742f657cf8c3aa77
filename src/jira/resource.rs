/// A paginated list endpoint of the agile REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    ClosedSprints { board_id: u64 },
    SprintIssues { sprint_id: u64 },
}

impl Resource {
    pub fn path(&self) -> String {
        match self {
            Resource::ClosedSprints { board_id } => {
                format!("/rest/agile/1.0/board/{board_id}/sprint")
            }
            Resource::SprintIssues { sprint_id } => {
                format!("/rest/agile/1.0/sprint/{sprint_id}/issue")
            }
        }
    }

    pub fn query(&self, start_at: usize, page_size: usize) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(3);
        if let Resource::ClosedSprints { .. } = self {
            query.push(("state", "closed".to_string()));
        }
        query.push(("startAt", start_at.to_string()));
        query.push(("maxResults", page_size.to_string()));
        query
    }

    /// Key of the array holding the records of one page.
    pub fn records_key(&self) -> &'static str {
        match self {
            Resource::ClosedSprints { .. } => "values",
            Resource::SprintIssues { .. } => "issues",
        }
    }
}
