use super::*;
use crate::analyze::SpilloverReason;
use crate::jira::Page;
use crate::model::Error;
use indicatif::ProgressDrawTarget;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

const BOARD_ID: u64 = 7;

/// Serves scripted pages per resource and logs every resource requested.
#[derive(Default)]
struct Board {
    pages: RefCell<HashMap<Resource, VecDeque<Page>>>,
    requests: RefCell<Vec<Resource>>,
}

impl Board {
    fn with_pages(self, resource: Resource, pages: Vec<Page>) -> Self {
        self.pages.borrow_mut().insert(resource, pages.into());
        self
    }

    fn requests_for(&self, resource: Resource) -> usize {
        self.requests.borrow().iter().filter(|r| **r == resource).count()
    }
}

impl PageSource for Board {
    async fn fetch_page(
        &self,
        resource: &Resource,
        _start_at: usize,
        _page_size: usize,
    ) -> model::Result<Page> {
        self.requests.borrow_mut().push(*resource);
        self.pages
            .borrow_mut()
            .get_mut(resource)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| Error::Status {
                url: resource.path(),
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            })
    }
}

fn args() -> Args {
    Args::parse_from([
        "jira-spillover",
        "--jira-url",
        "https://acme.atlassian.net",
        "--jira-email",
        "dev@example.com",
        "--jira-token",
        "secret-token",
        "--board",
        "7",
        "--page-size",
        "2",
    ])
}

fn hidden_progress() -> MultiProgress {
    MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
}

fn sprint(id: u64, start: Option<&str>, end: Option<&str>) -> Value {
    json!({
        "id": id,
        "name": format!("Sprint {id}"),
        "state": "closed",
        "startDate": start,
        "endDate": end,
    })
}

fn issue(key: &str, status: &str, assignee: Option<&str>, points: f64, created: &str) -> Value {
    json!({
        "key": key,
        "fields": {
            "summary": format!("Work on {key}"),
            "status": { "statusCategory": { "name": status } },
            "assignee": assignee.map(|name| json!({ "displayName": name })),
            "customfield_10016": points,
            "created": created,
            "updated": created,
        }
    })
}

fn sprints() -> Vec<Page> {
    vec![
        Page::new(
            vec![
                sprint(1, Some("2024-01-01T09:00:00.000Z"), Some("2024-01-14T17:00:00.000Z")),
                sprint(2, None, None),
            ],
            false,
        ),
        Page::new(
            vec![sprint(3, Some("2024-01-15T09:00:00.000Z"), Some("2024-01-28T17:00:00.000Z"))],
            true,
        ),
    ]
}

fn three_sprint_board() -> Board {
    Board::default()
        .with_pages(Resource::ClosedSprints { board_id: BOARD_ID }, sprints())
        .with_pages(
            Resource::SprintIssues { sprint_id: 1 },
            vec![Page::new(
                vec![
                    issue("PAY-1", "Done", Some("Ana"), 3.0, "2023-12-20T10:00:00.000+0000"),
                    issue("PAY-2", "In Progress", Some("Ana"), 8.0, "2023-12-20T10:00:00.000+0000"),
                ],
                true,
            )],
        )
        .with_pages(
            Resource::SprintIssues { sprint_id: 2 },
            vec![Page::new(vec![issue("PAY-9", "To Do", Some("Ana"), 1.0, "2024-01-02")], true)],
        )
        .with_pages(
            Resource::SprintIssues { sprint_id: 3 },
            vec![
                Page::new(
                    vec![
                        issue("PAY-3", "To Do", Some("Ben"), 2.0, "2024-01-20T10:00:00.000+0000"),
                        issue("PAY-2", "In Progress", None, 1.0, "2023-12-20T10:00:00.000+0000"),
                    ],
                    false,
                ),
                Page::new(
                    vec![issue("PAY-4", "DONE", Some("Ben"), 5.0, "2024-01-16T10:00:00.000+0000")],
                    true,
                ),
            ],
        )
}

#[tokio::test]
async fn analyze_board_skips_issue_fetch_for_undated_sprints() {
    let board = three_sprint_board();

    let report = analyze_board(&board, &args(), &hidden_progress()).await.unwrap();

    assert_eq!(report.sprints, 2);
    assert_eq!(board.requests_for(Resource::ClosedSprints { board_id: BOARD_ID }), 2);
    assert_eq!(board.requests_for(Resource::SprintIssues { sprint_id: 1 }), 1);
    assert_eq!(board.requests_for(Resource::SprintIssues { sprint_id: 2 }), 0);
    assert_eq!(board.requests_for(Resource::SprintIssues { sprint_id: 3 }), 2);
    assert!(report.classified.iter().all(|c| c.sprint != "Sprint 2"));
}

#[tokio::test]
async fn analyze_board_summary_counts_every_open_issue_across_sprints() {
    let board = three_sprint_board();

    let report = analyze_board(&board, &args(), &hidden_progress()).await.unwrap();

    let open_issues = report
        .classified
        .iter()
        .filter(|c| !c.issue.is_done())
        .count();
    let summarised: usize = report.summary.iter().map(|row| row.issues).sum();
    assert_eq!(report.classified.len(), 5);
    assert_eq!(open_issues, 3);
    assert_eq!(summarised, open_issues);

    let rows = report
        .summary
        .iter()
        .map(|row| (row.assignee.as_str(), row.reason, row.issues, row.story_points))
        .collect::<Vec<_>>();
    assert_eq!(
        rows,
        vec![
            ("Ana", SpilloverReason::Underestimated, 1, 8.0),
            ("Ben", SpilloverReason::ScopeAdded, 1, 2.0),
            ("Unassigned", SpilloverReason::NoAssignee, 1, 1.0),
        ]
    );
}

#[tokio::test]
async fn analyze_board_fails_when_a_sprint_issue_fetch_fails() {
    let board = Board::default()
        .with_pages(Resource::ClosedSprints { board_id: BOARD_ID }, sprints())
        .with_pages(
            Resource::SprintIssues { sprint_id: 1 },
            vec![Page::new(vec![], true)],
        );

    let err = analyze_board(&board, &args(), &hidden_progress())
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("failed to fetch issues of sprint `Sprint 3`"));
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Status { .. })));
}
