use chrono::Utc;

use crate::models::{
    ActivityPercent, ActivitySummary, AdviceReport, AdviceResponse, AnalysisResponse,
    ContributionCalendar, DerivedMetrics, EnrichedRecommendation, EnrichedRepo,
    LanguageBreakdown, Profile, ReportData, RepoReference, Repository, Stats,
};
use crate::report::colors::{color_for, DEFAULT_COLOR};

/// Join model repo references with ground-truth repositories by
/// case-insensitive exact name. Unmatched names keep null/zero defaults
/// rather than failing the merge.
pub fn merge_repo_references(
    refs: &[RepoReference],
    ground_truth: &[Repository],
) -> Vec<EnrichedRepo> {
    refs.iter()
        .map(|r| match find_repo(ground_truth, &r.name) {
            Some(repo) => EnrichedRepo {
                name: repo.name.clone(),
                highlight: r.highlight.clone(),
                html_url: Some(repo.html_url.clone()),
                language: repo.language.clone(),
                color: repo
                    .language
                    .as_deref()
                    .map(color_for)
                    .unwrap_or(DEFAULT_COLOR)
                    .to_string(),
                stars: repo.stargazers_count,
                forks: repo.forks_count,
            },
            None => EnrichedRepo {
                name: r.name.clone(),
                highlight: r.highlight.clone(),
                html_url: None,
                language: None,
                color: DEFAULT_COLOR.to_string(),
                stars: 0,
                forks: 0,
            },
        })
        .collect()
}

fn find_repo<'a>(repos: &'a [Repository], name: &str) -> Option<&'a Repository> {
    repos.iter().find(|r| r.name.eq_ignore_ascii_case(name))
}

pub fn derived_metrics(
    profile: &Profile,
    stats: &Stats,
    activity: &ActivitySummary,
) -> DerivedMetrics {
    let stars_per_repo = if profile.public_repos == 0 {
        0.0
    } else {
        (stats.total_stars as f64 / profile.public_repos as f64 * 10.0).round() / 10.0
    };

    let collaboration_ratio = if activity.total_events == 0 {
        0.0
    } else {
        ((activity.pr_events + activity.review_events) as f64 / activity.total_events as f64
            * 100.0)
            .round()
            / 100.0
    };

    DerivedMetrics {
        stars_per_repo,
        collaboration_ratio,
        activity_percent: activity_percentages(activity),
    }
}

/// Push/pr/issue are rounded independently; review takes the remainder so
/// the four always sum to exactly 100 (or all stay 0 with no events).
fn activity_percentages(activity: &ActivitySummary) -> ActivityPercent {
    if activity.total_events == 0 {
        return ActivityPercent {
            push: 0,
            pr: 0,
            issue: 0,
            review: 0,
        };
    }

    let total = activity.total_events as f64;
    let push = (activity.push_events as f64 / total * 100.0).round() as u32;
    let pr = (activity.pr_events as f64 / total * 100.0).round() as u32;
    let issue = (activity.issue_events as f64 / total * 100.0).round() as u32;
    let review = 100u32.saturating_sub(push + pr + issue);

    ActivityPercent {
        push,
        pr,
        issue,
        review,
    }
}

pub fn build_report(
    profile: &Profile,
    repos: &[Repository],
    analysis: AnalysisResponse,
    languages: Vec<LanguageBreakdown>,
    stats: Stats,
    activity: ActivitySummary,
    calendar: Option<ContributionCalendar>,
) -> ReportData {
    let metrics = derived_metrics(profile, &stats, &activity);
    let top_repositories = merge_repo_references(&analysis.top_repositories, repos);

    ReportData {
        username: profile.login.clone(),
        display_name: profile.name.clone(),
        generated_at: Utc::now(),
        summary: analysis.summary,
        developer_type: analysis.developer_type,
        strengths: analysis.strengths,
        growth_areas: analysis.growth_areas,
        radar: analysis.radar,
        radar_breakdown: analysis.radar_breakdown,
        top_repositories,
        languages,
        stats,
        activity,
        calendar,
        metrics,
    }
}

pub fn build_advice_report(
    profile: &Profile,
    repos: &[Repository],
    advice: AdviceResponse,
) -> AdviceReport {
    let recommendations = advice
        .recommendations
        .into_iter()
        .map(|rec| {
            let refs: Vec<RepoReference> = rec
                .related_repositories
                .iter()
                .map(|name| RepoReference {
                    name: name.clone(),
                    highlight: String::new(),
                })
                .collect();

            EnrichedRecommendation {
                title: rec.title,
                detail: rec.detail,
                difficulty: rec.difficulty,
                priority: rec.priority,
                related_repositories: merge_repo_references(&refs, repos),
            }
        })
        .collect();

    AdviceReport {
        username: profile.login.clone(),
        generated_at: Utc::now(),
        summary: advice.summary,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn repo(name: &str, language: Option<&str>, stars: u32, forks: u32) -> Repository {
        let ts = Utc.with_ymd_and_hms(2022, 3, 1, 0, 0, 0).unwrap();
        Repository {
            name: name.to_string(),
            full_name: format!("octocat/{}", name),
            description: None,
            html_url: format!("https://github.com/octocat/{}", name),
            language: language.map(String::from),
            stargazers_count: stars,
            forks_count: forks,
            watchers_count: stars,
            open_issues_count: 0,
            fork: false,
            archived: false,
            topics: Vec::new(),
            created_at: ts,
            updated_at: ts,
            pushed_at: Some(ts),
        }
    }

    fn profile(public_repos: u32) -> Profile {
        Profile {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            avatar_url: String::new(),
            html_url: String::new(),
            bio: None,
            company: None,
            location: None,
            public_repos,
            followers: 10,
            following: 2,
            created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn stats(total_stars: u32) -> Stats {
        Stats {
            total_stars,
            total_forks: 0,
            original_repos: 3,
            account_age_days: 1000,
            truncated: false,
        }
    }

    #[test]
    fn test_merge_is_case_insensitive() {
        let repos = vec![repo("Cool-Project", Some("Rust"), 42, 7)];
        let refs = vec![RepoReference {
            name: "cool-project".to_string(),
            highlight: "well factored".to_string(),
        }];

        let merged = merge_repo_references(&refs, &repos);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "Cool-Project");
        assert_eq!(merged[0].stars, 42);
        assert_eq!(merged[0].forks, 7);
        assert_eq!(merged[0].color, color_for("Rust"));
        assert_eq!(
            merged[0].html_url.as_deref(),
            Some("https://github.com/octocat/Cool-Project")
        );
    }

    #[test]
    fn test_unmatched_reference_gets_defaults() {
        let repos = vec![repo("real", Some("Go"), 5, 1)];
        let refs = vec![RepoReference {
            name: "hallucinated".to_string(),
            highlight: "does not exist".to_string(),
        }];

        let merged = merge_repo_references(&refs, &repos);
        assert_eq!(merged[0].html_url, None);
        assert_eq!(merged[0].language, None);
        assert_eq!(merged[0].color, DEFAULT_COLOR);
        assert_eq!(merged[0].stars, 0);
        assert_eq!(merged[0].forks, 0);
    }

    #[test]
    fn test_stars_per_repo_rounding() {
        let metrics = derived_metrics(&profile(3), &stats(10), &ActivitySummary::default());
        // 10 / 3 = 3.333.. -> 3.3
        assert_eq!(metrics.stars_per_repo, 3.3);
    }

    #[test]
    fn test_zero_denominators_yield_zero_not_nan() {
        let metrics = derived_metrics(&profile(0), &stats(10), &ActivitySummary::default());
        assert_eq!(metrics.stars_per_repo, 0.0);
        assert_eq!(metrics.collaboration_ratio, 0.0);
        assert_eq!(metrics.activity_percent.push, 0);
        assert_eq!(metrics.activity_percent.review, 0);
    }

    #[test]
    fn test_collaboration_ratio_two_decimals() {
        let activity = ActivitySummary {
            total_events: 30,
            push_events: 20,
            pr_events: 6,
            issue_events: 0,
            review_events: 4,
            recent_repos: Vec::new(),
        };
        let metrics = derived_metrics(&profile(1), &stats(0), &activity);
        // (6 + 4) / 30 = 0.3333.. -> 0.33
        assert_eq!(metrics.collaboration_ratio, 0.33);
    }

    #[test]
    fn test_activity_percentages_sum_to_100() {
        let activity = ActivitySummary {
            total_events: 7,
            push_events: 3,
            pr_events: 2,
            issue_events: 1,
            review_events: 1,
            recent_repos: Vec::new(),
        };
        let pct = derived_metrics(&profile(1), &stats(0), &activity).activity_percent;
        assert_eq!(pct.push + pct.pr + pct.issue + pct.review, 100);
        // 3/7 and 2/7 round to 43 and 29, 1/7 to 14; review takes the rest.
        assert_eq!(pct.push, 43);
        assert_eq!(pct.pr, 29);
        assert_eq!(pct.issue, 14);
        assert_eq!(pct.review, 14);
    }

    #[test]
    fn test_review_takes_rounding_remainder() {
        let activity = ActivitySummary {
            total_events: 3,
            push_events: 1,
            pr_events: 1,
            issue_events: 1,
            review_events: 0,
            recent_repos: Vec::new(),
        };
        let pct = derived_metrics(&profile(1), &stats(0), &activity).activity_percent;
        // 33 + 33 + 33 rounds below 100, review absorbs the remainder.
        assert_eq!(pct.review, 1);
    }

    #[test]
    fn test_review_clamps_when_rounding_overshoots() {
        let activity = ActivitySummary {
            total_events: 200,
            push_events: 99,
            pr_events: 99,
            issue_events: 1,
            review_events: 1,
            recent_repos: Vec::new(),
        };
        let pct = derived_metrics(&profile(1), &stats(0), &activity).activity_percent;
        // 50 + 50 + 1 already exceeds 100; review clamps to 0.
        assert_eq!(pct.push, 50);
        assert_eq!(pct.pr, 50);
        assert_eq!(pct.issue, 1);
        assert_eq!(pct.review, 0);
    }
}
