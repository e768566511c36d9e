use std::collections::HashMap;

use chrono::Utc;

use crate::models::{
    ActivitySummary, ContributionCalendar, Event, LanguageBreakdown, Profile,
    RawContributionCalendar, Repository, Stats,
};
use crate::report::colors::color_for;

const MAX_RECENT_REPOS: usize = 10;

/// Language distribution over non-fork repositories with a known language.
/// Empty input or no tagged languages produce an empty list, never an error.
pub fn language_breakdown(repos: &[Repository]) -> Vec<LanguageBreakdown> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for repo in repos.iter().filter(|r| !r.fork) {
        if let Some(language) = repo.language.as_deref() {
            *counts.entry(language).or_insert(0) += 1;
        }
    }

    let total: u32 = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut breakdown: Vec<LanguageBreakdown> = counts
        .into_iter()
        .map(|(language, count)| LanguageBreakdown {
            language: language.to_string(),
            color: color_for(language).to_string(),
            percentage: (count as f64 / total as f64 * 1000.0).round() / 10.0,
            count,
        })
        .collect();

    // Ties broken by name so the output is deterministic.
    breakdown.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.language.cmp(&b.language)));
    breakdown
}

/// Classify events into the four tracked categories. Tags outside the
/// mapping still count toward the total.
pub fn activity_summary(events: &[Event]) -> ActivitySummary {
    let mut summary = ActivitySummary {
        total_events: events.len() as u32,
        ..Default::default()
    };

    for event in events {
        match event.event_type.as_str() {
            "PushEvent" => summary.push_events += 1,
            "PullRequestEvent" => summary.pr_events += 1,
            "IssuesEvent" | "IssueCommentEvent" => summary.issue_events += 1,
            "PullRequestReviewEvent" | "PullRequestReviewCommentEvent" => {
                summary.review_events += 1
            }
            _ => {}
        }

        if summary.recent_repos.len() < MAX_RECENT_REPOS
            && !summary.recent_repos.iter().any(|r| r == &event.repo.name)
        {
            summary.recent_repos.push(event.repo.name.clone());
        }
    }

    summary
}

pub fn build_stats(profile: &Profile, repos: &[Repository], capped: bool) -> Stats {
    let total_stars = repos.iter().map(|r| r.stargazers_count).sum();
    let total_forks = repos.iter().map(|r| r.forks_count).sum();
    let original_repos = repos.iter().filter(|r| !r.fork).count() as u32;
    let account_age_days = (Utc::now() - profile.created_at).num_days();
    let truncated = capped && profile.public_repos as usize > repos.len();

    Stats {
        total_stars,
        total_forks,
        original_repos,
        account_age_days,
        truncated,
    }
}

/// Transpose the week-major daily counts into 7 day rows and bucket each
/// cell by the quartiles of the non-zero values. An all-zero calendar maps
/// to an all-zero grid.
pub fn build_heatmap(raw: &RawContributionCalendar) -> ContributionCalendar {
    let week_count = raw.weeks.len();
    let mut counts = vec![vec![0u32; week_count]; 7];
    for (w, week) in raw.weeks.iter().enumerate() {
        for (d, &count) in week.iter().take(7).enumerate() {
            counts[d][w] = count;
        }
    }

    let mut nonzero: Vec<u32> = raw
        .weeks
        .iter()
        .flatten()
        .copied()
        .filter(|&c| c > 0)
        .collect();
    nonzero.sort_unstable();

    let grid = if nonzero.is_empty() {
        counts
            .iter()
            .map(|row| vec![0u8; row.len()])
            .collect()
    } else {
        let q1 = quartile(&nonzero, 1);
        let q2 = quartile(&nonzero, 2);
        let q3 = quartile(&nonzero, 3);
        counts
            .iter()
            .map(|row| row.iter().map(|&v| level_for(v, q1, q2, q3)).collect())
            .collect()
    };

    ContributionCalendar {
        total: raw.total,
        grid,
    }
}

fn quartile(sorted: &[u32], k: usize) -> u32 {
    let idx = (sorted.len() * k / 4).min(sorted.len() - 1);
    sorted[idx]
}

fn level_for(value: u32, q1: u32, q2: u32, q3: u32) -> u8 {
    if value == 0 {
        0
    } else if value <= q1 {
        1
    } else if value <= q2 {
        2
    } else if value <= q3 {
        3
    } else {
        4
    }
}
