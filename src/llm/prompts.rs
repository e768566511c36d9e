use crate::models::{ActivitySummary, LanguageBreakdown, Profile, Repository, Stats};

/// Rendered in place of absent optional fields so the model input keeps a
/// stable shape.
pub const PLACEHOLDER: &str = "N/A";

const TOP_REPOS: usize = 6;
const TOP_LANGUAGES: usize = 8;

pub const ANALYSIS_INSTRUCTION: &str = "\
Evaluate this developer profile. Score each of the six axes from 0 to 100 \
based only on the data above, explain each score in one sentence, and pick \
the repositories that best support your assessment.";

pub const ADVICE_INSTRUCTION: &str = "\
Based on the profile above, recommend concrete next steps for this \
developer. Each recommendation must be actionable, reference repositories \
from the data where relevant, and honestly rate its difficulty and priority.";

/// Aggregated inputs serialized into one deterministic text block.
pub struct PromptContext<'a> {
    pub profile: &'a Profile,
    pub stats: &'a Stats,
    /// Sorted by stars descending; the first 6 are the top repositories.
    pub repos: &'a [Repository],
    pub languages: &'a [LanguageBreakdown],
    pub activity: &'a ActivitySummary,
}

impl PromptContext<'_> {
    pub fn build_context(&self, closing_instruction: &str) -> String {
        let mut prompt = String::new();

        prompt.push_str("## Profile\n");
        prompt.push_str(&format!("Username: {}\n", self.profile.login));
        prompt.push_str(&format!("Name: {}\n", opt(self.profile.name.as_deref())));
        prompt.push_str(&format!("Bio: {}\n", opt(self.profile.bio.as_deref())));
        prompt.push_str(&format!(
            "Company: {}\n",
            opt(self.profile.company.as_deref())
        ));
        prompt.push_str(&format!(
            "Location: {}\n",
            opt(self.profile.location.as_deref())
        ));
        prompt.push_str(&format!(
            "Followers: {} / Following: {}\n",
            self.profile.followers, self.profile.following
        ));
        prompt.push_str(&format!("Public repos: {}\n", self.profile.public_repos));

        prompt.push_str("\n## Stats\n");
        prompt.push_str(&format!("Total stars: {}\n", self.stats.total_stars));
        prompt.push_str(&format!("Total forks: {}\n", self.stats.total_forks));
        prompt.push_str(&format!(
            "Original (non-fork) repos: {}\n",
            self.stats.original_repos
        ));
        prompt.push_str(&format!(
            "Account age: {} days\n",
            self.stats.account_age_days
        ));
        if self.stats.truncated {
            prompt.push_str("Note: repository listing truncated by pagination cap\n");
        }

        prompt.push_str("\n## Top repositories\n");
        for repo in self.repos.iter().take(TOP_REPOS) {
            prompt.push_str(&format!(
                "- {} | stars {} | forks {} | language {} | {}\n",
                repo.name,
                repo.stargazers_count,
                repo.forks_count,
                opt(repo.language.as_deref()),
                opt(repo.description.as_deref()),
            ));
        }

        prompt.push_str("\n## Languages\n");
        for lang in self.languages.iter().take(TOP_LANGUAGES) {
            prompt.push_str(&format!(
                "- {}: {}% ({} repos)\n",
                lang.language, lang.percentage, lang.count
            ));
        }

        prompt.push_str("\n## Recent activity\n");
        prompt.push_str(&format!(
            "Events: {} (push {}, pull requests {}, issues {}, reviews {})\n",
            self.activity.total_events,
            self.activity.push_events,
            self.activity.pr_events,
            self.activity.issue_events,
            self.activity.review_events
        ));
        let active = if self.activity.recent_repos.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            self.activity.recent_repos.join(", ")
        };
        prompt.push_str(&format!("Recently active in: {}\n", active));

        prompt.push('\n');
        prompt.push_str(closing_instruction);
        prompt.push('\n');

        prompt
    }
}

fn opt(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => PLACEHOLDER,
    }
}
