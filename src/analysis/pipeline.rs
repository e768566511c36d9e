use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::analysis::aggregator;
use crate::error::Result;
use crate::github::{validate_username, GithubClient};
use crate::llm::{
    advice_schema, analysis_schema, ModelProvider, PromptContext, ADVICE_INSTRUCTION,
    ANALYSIS_INSTRUCTION,
};
use crate::models::{AdviceReport, AdviceResponse, AnalysisResponse, ReportData};
use crate::report::merger;
use crate::report::normalizer::normalize_radar;

/// The full run for one username: fan-out fetch, aggregation, one
/// schema-constrained generation, canonical reordering, ground-truth merge.
pub struct ReportPipeline {
    github: Arc<GithubClient>,
    model: Arc<dyn ModelProvider>,
}

impl ReportPipeline {
    pub fn new(github: GithubClient, model: impl ModelProvider + 'static) -> Self {
        Self {
            github: Arc::new(github),
            model: Arc::new(model),
        }
    }

    pub async fn analyze(&self, username: &str, cancel: CancellationToken) -> Result<ReportData> {
        validate_username(username)?;
        tracing::info!("Starting analysis for: {}", username);

        // Step 1: concurrent source fetch
        let bundle = self.github.fetch_bundle(username, &cancel).await?;
        tracing::info!(
            "Fetched {} repos and {} events for {}",
            bundle.repos.len(),
            bundle.events.len(),
            username
        );

        // Step 2: aggregate ground truth
        let languages = aggregator::language_breakdown(&bundle.repos);
        let activity = aggregator::activity_summary(&bundle.events);
        let stats = aggregator::build_stats(&bundle.profile, &bundle.repos, bundle.capped);
        let calendar = bundle.calendar.as_ref().map(aggregator::build_heatmap);

        // Step 3: prompt + generation
        let context = PromptContext {
            profile: &bundle.profile,
            stats: &stats,
            repos: &bundle.repos,
            languages: &languages,
            activity: &activity,
        };
        let prompt = context.build_context(ANALYSIS_INSTRUCTION);
        let schema = analysis_schema();
        let raw = self.model.generate(prompt, &schema, &cancel).await?;
        let analysis: AnalysisResponse = serde_json::from_value(raw)?;

        // Step 4: canonical radar order, then merge with ground truth
        let analysis = normalize_radar(analysis);
        let report = merger::build_report(
            &bundle.profile,
            &bundle.repos,
            analysis,
            languages,
            stats,
            activity,
            calendar,
        );

        tracing::info!("Report ready for {}", username);
        Ok(report)
    }

    pub async fn advise(&self, username: &str, cancel: CancellationToken) -> Result<AdviceReport> {
        validate_username(username)?;
        tracing::info!("Starting advice run for: {}", username);

        let bundle = self.github.fetch_bundle(username, &cancel).await?;

        let languages = aggregator::language_breakdown(&bundle.repos);
        let activity = aggregator::activity_summary(&bundle.events);
        let stats = aggregator::build_stats(&bundle.profile, &bundle.repos, bundle.capped);

        let context = PromptContext {
            profile: &bundle.profile,
            stats: &stats,
            repos: &bundle.repos,
            languages: &languages,
            activity: &activity,
        };
        let prompt = context.build_context(ADVICE_INSTRUCTION);
        let schema = advice_schema();
        let raw = self.model.generate(prompt, &schema, &cancel).await?;
        let advice: AdviceResponse = serde_json::from_value(raw)?;

        let report = merger::build_advice_report(&bundle.profile, &bundle.repos, advice);

        tracing::info!("Advice ready for {}", username);
        Ok(report)
    }
}
