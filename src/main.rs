mod analyze;
mod jira;
mod model;
mod report;
mod utils;

use crate::analyze::{classify_sprint, SummaryRow};
use crate::jira::{fetch_all, JiraClient, JiraConfig, PageSource, Resource};
use crate::model::{Issue, Sprint, DEFAULT_STORY_POINTS_FIELD};
use crate::report::SpilloverReport;
use crate::utils::{MultiProgressNew, ProgressStyleTemplate};
use anyhow::{bail, Context};
use clap::Parser;
use indicatif::MultiProgress;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Explains why issues of closed sprints were left unfinished.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
struct Args {
    #[arg(long = "jira-url", env = "JIRA_BASE_URL")]
    jira_url: String,
    #[arg(long = "jira-email", env = "JIRA_EMAIL")]
    jira_email: String,
    #[arg(long = "jira-token", env = "JIRA_API_TOKEN", hide_env_values = true)]
    jira_token: String,
    #[arg(long = "board", env = "JIRA_BOARD_ID", default_value_t = 1)]
    board_id: u64,
    #[arg(long = "page-size", default_value_t = 100)]
    page_size: usize,
    #[arg(long = "story-points-field", default_value = DEFAULT_STORY_POINTS_FIELD)]
    story_points_field: String,
    /// Per-request timeout in seconds; requests wait indefinitely when unset.
    #[arg(long = "timeout")]
    timeout_secs: Option<u64>,
    #[arg(long = "output-dir", default_value = ".")]
    output_dir: PathBuf,
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    run(&args).await
}

async fn run(args: &Args) -> anyhow::Result<()> {
    if args.page_size == 0 {
        bail!("--page-size must be at least 1");
    }
    let config = JiraConfig::new(
        &args.jira_url,
        &args.jira_email,
        &args.jira_token,
        args.timeout_secs.map(Duration::from_secs),
    )?;
    debug!(?config, board = args.board_id, "starting spillover analysis");
    let client = JiraClient::new(config)?;

    let multi_progress = MultiProgress::new();
    let report = analyze_board(&client, args, &multi_progress).await?;

    println!("{}", report.chart());
    print_summary(&report.summary);
    report
        .write_files(&args.output_dir)
        .context("failed to write reports")?;
    Ok(())
}

/// Fetches every closed sprint of the board and classifies the issues of
/// each sprint that has a start and end date.
async fn analyze_board<S: PageSource>(
    source: &S,
    args: &Args,
    multi_progress: &MultiProgress,
) -> anyhow::Result<SpilloverReport> {
    let sprints = fetch_sprints(source, args, multi_progress)
        .await
        .context("failed to fetch closed sprints")?;
    info!(count = sprints.len(), "found closed sprints");

    let mut classified = Vec::new();
    for sprint in &sprints {
        let issues = fetch_issues(source, sprint, args, multi_progress)
            .await
            .with_context(|| format!("failed to fetch issues of sprint `{}`", sprint.name))?;
        info!(sprint = %sprint.name, issues = issues.len(), "classifying sprint");
        classified.extend(classify_sprint(sprint, issues));
    }
    Ok(SpilloverReport::new(sprints.len(), classified))
}

async fn fetch_sprints<S: PageSource>(
    source: &S,
    args: &Args,
    multi_progress: &MultiProgress,
) -> model::Result<Vec<Sprint>> {
    let pb = multi_progress.add_spinner(
        ProgressStyleTemplate::record_counter(),
        format!("Fetch closed sprints of board #{}", args.board_id),
    );
    let progress_pb = pb.clone();
    let resource = Resource::ClosedSprints {
        board_id: args.board_id,
    };
    let raw = fetch_all(
        source,
        &resource,
        args.page_size,
        Box::new(move |total: usize| progress_pb.set_position(total as u64)),
    )
    .await?;

    let sprints = raw
        .iter()
        .map(Sprint::from_raw)
        .filter_map(Result::transpose)
        .collect::<model::Result<Vec<_>>>()?;
    for sprint in sprints.iter().filter(|sprint| !sprint.closed) {
        warn!(sprint = %sprint.name, "board listed a sprint that is not marked closed");
    }
    pb.set_style(ProgressStyleTemplate::only_message());
    pb.finish_with_message(format!(
        "✅ Completed fetch sprints (find {} closed, {} usable)",
        raw.len(),
        sprints.len()
    ));
    Ok(sprints)
}

async fn fetch_issues<S: PageSource>(
    source: &S,
    sprint: &Sprint,
    args: &Args,
    multi_progress: &MultiProgress,
) -> model::Result<Vec<Issue>> {
    let pb = multi_progress.add_spinner(
        ProgressStyleTemplate::record_counter(),
        format!("Fetch issues of `{}`", sprint.name),
    );
    let progress_pb = pb.clone();
    let resource = Resource::SprintIssues {
        sprint_id: sprint.id,
    };
    let raw = fetch_all(
        source,
        &resource,
        args.page_size,
        Box::new(move |total: usize| progress_pb.set_position(total as u64)),
    )
    .await?;

    let issues = raw
        .iter()
        .map(|details| Issue::from_raw(details, &args.story_points_field))
        .collect::<model::Result<Vec<_>>>()?;
    pb.set_style(ProgressStyleTemplate::only_message());
    pb.finish_with_message(format!(
        "✅ Sprint `{}` (find {} issues)",
        sprint.name,
        issues.len()
    ));
    Ok(issues)
}

fn print_summary(summary: &[SummaryRow]) {
    println!("=== Spillover Summary ===");
    if summary.is_empty() {
        println!("No issue spilled over.");
        return;
    }
    let assignee_width = summary
        .iter()
        .map(|row| row.assignee.chars().count())
        .max()
        .unwrap_or(0)
        .max("Assignee".len());
    println!(
        "{:<assignee_width$}  {:<30}  {:>14}  {:>12}",
        "Assignee", "Spillover Reason", "Spilled Issues", "Story Points"
    );
    for row in summary {
        println!(
            "{:<assignee_width$}  {:<30}  {:>14}  {:>12}",
            row.assignee,
            row.reason.label(),
            row.issues,
            row.story_points
        );
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
