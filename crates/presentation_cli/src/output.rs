//! Human-readable rendering of run summaries

use std::fmt::Write as _;

use application::ports::FetchEvent;
use application::{RunReport, StageStatus};
use domain::{Comment, Post, Profile};
use infrastructure::ChaosStats;

use crate::summary::{RunOutcome, RunSummary};

/// Render one summary as indented text
pub fn render_summary(summary: &RunSummary) -> String {
    let mut out = format!("== {} ({} ms) ==\n", summary.strategy, summary.elapsed_ms);

    match &summary.outcome {
        RunOutcome::Completed { report } => render_report(&mut out, report),
        RunOutcome::Failed { reason, .. } => {
            let _ = writeln!(out, "  Error: {reason}");
        },
    }

    if !summary.events.is_empty() {
        out.push_str("  Events:\n");
        for event in &summary.events {
            let _ = writeln!(out, "    {}", describe_event(event));
        }
    }
    out
}

fn render_report(out: &mut String, report: &RunReport) {
    match report {
        RunReport::Sequential(r) => {
            let _ = writeln!(out, "  Final comments:");
            write_comments(out, &r.comments);
        },
        RunReport::Parallel(r) => {
            write_profile(out, &r.profile);
            write_posts(out, &r.posts);
            write_comments(out, &r.comments);
        },
        RunReport::Resilient(r) => {
            match r.result.profile() {
                Some(profile) => write_profile(out, profile),
                None => out.push_str("  Profile: (missing)\n"),
            }
            write_posts(out, r.result.posts());
            write_comments(out, r.result.comments());
            for stage in &r.stages {
                let status = match &stage.status {
                    StageStatus::Succeeded => "succeeded".to_string(),
                    StageStatus::Failed { message } => format!("failed: {message}"),
                    StageStatus::Skipped { reason } => format!("skipped: {reason}"),
                };
                let _ = writeln!(out, "  [{}] {status}", stage.resource.as_str());
            }
        },
    }
}

fn write_profile(out: &mut String, profile: &Profile) {
    let _ = writeln!(
        out,
        "  Profile: #{} {} <{}>",
        profile.id(),
        profile.name(),
        profile.email()
    );
}

fn write_posts(out: &mut String, posts: &[Post]) {
    let _ = writeln!(out, "  Posts ({}):", posts.len());
    for post in posts {
        let _ = writeln!(out, "    #{} {}", post.id, post.title);
    }
}

fn write_comments(out: &mut String, comments: &[Comment]) {
    let _ = writeln!(out, "  Comments ({}):", comments.len());
    for comment in comments {
        let _ = writeln!(
            out,
            "    #{} on post {}: {}",
            comment.id, comment.post_id, comment.content
        );
    }
}

fn describe_event(event: &FetchEvent) -> String {
    match event {
        FetchEvent::Started { resource } => format!("started   {}", resource.as_str()),
        FetchEvent::Succeeded { resource, items } => {
            format!("succeeded {} ({items} items)", resource.as_str())
        },
        FetchEvent::Failed { resource, reason } => {
            format!("failed    {}: {reason}", resource.as_str())
        },
        FetchEvent::Skipped { resource, reason } => {
            format!("skipped   {}: {reason}", resource.as_str())
        },
    }
}

/// One-line injection statistics
pub fn render_stats(stats: &ChaosStats) -> String {
    format!(
        "Fault injection: {} of {} calls failed ({:.0}%) [profile {}, posts {}, comments {}]",
        stats.faults_injected,
        stats.total_calls,
        stats.actual_fault_rate() * 100.0,
        stats.profile_faults,
        stats.posts_faults,
        stats.comments_faults
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use application::{ApplicationError, StrategyKind};
    use domain::{FetchError, ResourceKind};

    use super::*;

    #[test]
    fn failed_run_shows_reason() {
        let summary = RunSummary::new(
            StrategyKind::Sequential,
            Duration::from_millis(1000),
            Err(ApplicationError::from(FetchError::new(
                ResourceKind::Profile,
                "down",
            ))),
            vec![FetchEvent::Failed {
                resource: ResourceKind::Profile,
                reason: "Failed to fetch user profile".to_string(),
            }],
        );

        let text = render_summary(&summary);
        assert!(text.starts_with("== sequential (1000 ms) =="));
        assert!(text.contains("Error: Failed to fetch user profile"));
        assert!(text.contains("failed    profile: Failed to fetch user profile"));
    }

    #[test]
    fn stats_line() {
        let stats = ChaosStats {
            total_calls: 10,
            faults_injected: 3,
            profile_faults: 1,
            posts_faults: 1,
            comments_faults: 1,
        };
        assert_eq!(
            render_stats(&stats),
            "Fault injection: 3 of 10 calls failed (30%) [profile 1, posts 1, comments 1]"
        );
    }
}
