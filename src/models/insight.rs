use serde::{Deserialize, Serialize};

use super::profile::{Event, Profile, Repository};

/// One slice of the language distribution over non-fork repositories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageBreakdown {
    pub language: String,
    pub color: String,
    /// Share of non-fork, language-tagged repos, rounded to one decimal.
    pub percentage: f64,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ActivitySummary {
    pub total_events: u32,
    pub push_events: u32,
    pub pr_events: u32,
    pub issue_events: u32,
    pub review_events: u32,
    /// Up to 10 distinct repo names, first-seen order (events arrive
    /// newest-first, so first-seen = most recently active).
    pub recent_repos: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    pub total_stars: u32,
    pub total_forks: u32,
    pub original_repos: u32,
    pub account_age_days: i64,
    /// Pagination hit its cap and the profile reports more repos than were
    /// fetched.
    pub truncated: bool,
}

/// Daily contribution counts as the upstream calendar reports them:
/// week-major, up to 7 days per week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawContributionCalendar {
    pub total: u32,
    pub weeks: Vec<Vec<u32>>,
}

/// Quartile-bucketed contribution heatmap. `grid` is day-major: 7 rows of
/// one level (0..=4) per week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionCalendar {
    pub total: u32,
    pub grid: Vec<Vec<u8>>,
}

/// Everything the fan-out fetch produced for one username.
#[derive(Debug, Clone)]
pub struct SourceBundle {
    pub profile: Profile,
    pub repos: Vec<Repository>,
    /// The repository pagination cap was reached.
    pub capped: bool,
    pub events: Vec<Event>,
    pub calendar: Option<RawContributionCalendar>,
}
