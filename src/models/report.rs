use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::insight::{ActivitySummary, ContributionCalendar, LanguageBreakdown, Stats};

/// Payload the model returns for an analysis run. Shape is enforced
/// upstream by the strict output schema, so deserialization here does not
/// re-validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub summary: String,
    pub developer_type: String,
    pub strengths: Vec<Insight>,
    pub growth_areas: Vec<Insight>,
    pub radar: Vec<RadarScore>,
    pub radar_breakdown: Vec<RadarDetail>,
    pub top_repositories: Vec<RepoReference>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub detail: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarScore {
    pub axis: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarDetail {
    pub axis: String,
    pub score: u32,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoReference {
    pub name: String,
    pub highlight: String,
}

/// Payload the model returns for an advice run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub summary: String,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub detail: String,
    pub difficulty: Difficulty,
    pub priority: Priority,
    #[serde(default)]
    pub related_repositories: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A model repo reference joined with ground-truth repository data. Fields
/// stay at their defaults when no repository matched the referenced name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedRepo {
    pub name: String,
    pub highlight: String,
    pub html_url: Option<String>,
    pub language: Option<String>,
    pub color: String,
    pub stars: u32,
    pub forks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityPercent {
    pub push: u32,
    pub pr: u32,
    pub issue: u32,
    pub review: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub stars_per_repo: f64,
    pub collaboration_ratio: f64,
    pub activity_percent: ActivityPercent,
}

/// Final merged artifact for an analysis run. Owned by the caller once the
/// pipeline returns it; the core never persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    pub username: String,
    pub display_name: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub summary: String,
    pub developer_type: String,
    pub strengths: Vec<Insight>,
    pub growth_areas: Vec<Insight>,
    pub radar: Vec<RadarScore>,
    pub radar_breakdown: Vec<RadarDetail>,
    pub top_repositories: Vec<EnrichedRepo>,
    pub languages: Vec<LanguageBreakdown>,
    pub stats: Stats,
    pub activity: ActivitySummary,
    pub calendar: Option<ContributionCalendar>,
    pub metrics: DerivedMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedRecommendation {
    pub title: String,
    pub detail: String,
    pub difficulty: Difficulty,
    pub priority: Priority,
    pub related_repositories: Vec<EnrichedRepo>,
}

/// Final merged artifact for an advice run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceReport {
    pub username: String,
    pub generated_at: DateTime<Utc>,
    pub summary: String,
    pub recommendations: Vec<EnrichedRecommendation>,
}
