use std::future::Future;
use std::time::Duration;

use futures::try_join;
use reqwest::{header, Client, Response, StatusCode};
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::graphql;
use crate::github::paginator::Paginator;
use crate::models::{Event, Profile, RawContributionCalendar, Repository, SourceBundle};

/// Per-call deadline for every upstream request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const PAGE_SIZE: u32 = 100;
const MAX_PAGES: u32 = 10;

/// Username grammar: 1-39 characters, ASCII alphanumeric plus hyphen, no
/// leading or trailing hyphen.
pub fn validate_username(username: &str) -> Result<()> {
    let valid = !username.is_empty()
        && username.len() <= 39
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !username.starts_with('-')
        && !username.ends_with('-');

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidUsername(username.to_string()))
    }
}

pub struct GithubClient {
    client: Client,
    base_url: String,
    graphql_url: String,
    has_token: bool,
}

impl GithubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("devradar/0.1"),
        );
        if let Some(token) = &config.github_token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.github_api_url.clone(),
            graphql_url: config.github_graphql_url.clone(),
            has_token: config.github_token.is_some(),
        })
    }

    /// All four source fetches for one request, concurrently. A fatal error
    /// in any non-isolated branch triggers `cancel` so the still-pending
    /// siblings short-circuit; the calendar branch is isolated and collapses
    /// its own failures to `None`.
    pub async fn fetch_bundle(
        &self,
        username: &str,
        cancel: &CancellationToken,
    ) -> Result<SourceBundle> {
        let (profile, (repos, capped), events, calendar) = try_join!(
            fatal(self.fetch_profile(username, cancel), cancel),
            fatal(self.fetch_repositories(username, cancel), cancel),
            fatal(self.fetch_events(username, cancel), cancel),
            async { Ok::<_, Error>(self.fetch_contribution_calendar(username).await) },
        )?;

        Ok(SourceBundle {
            profile,
            repos,
            capped,
            events,
            calendar,
        })
    }

    pub async fn fetch_profile(
        &self,
        username: &str,
        cancel: &CancellationToken,
    ) -> Result<Profile> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!("Fetching profile: {}", username);

        let response = self.get_guarded(&url, "profile fetch", cancel).await?;
        let response = Self::check_status(response, username)?;

        Ok(response.json().await?)
    }

    /// Paged repository listing, sorted by stars descending. The second
    /// element reports whether the page cap was hit.
    pub async fn fetch_repositories(
        &self,
        username: &str,
        cancel: &CancellationToken,
    ) -> Result<(Vec<Repository>, bool)> {
        let url = format!("{}/users/{}/repos?type=owner", self.base_url, username);
        tracing::info!("Fetching repositories for: {}", username);

        let walk = Paginator::new(self)
            .fetch_pages::<Repository>(&url, PAGE_SIZE, MAX_PAGES, "repository listing", username, cancel)
            .await?;

        let mut repos = walk.items;
        repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));

        Ok((repos, walk.capped))
    }

    /// Most recent public events, single page of up to 100.
    pub async fn fetch_events(
        &self,
        username: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<Event>> {
        let url = format!(
            "{}/users/{}/events/public?per_page={}",
            self.base_url, username, PAGE_SIZE
        );
        tracing::info!("Fetching events for: {}", username);

        let response = self.get_guarded(&url, "event fetch", cancel).await?;
        let response = Self::check_status(response, username)?;

        Ok(response.json().await?)
    }

    /// Soft-fail branch: requires the GraphQL token, and any failure here is
    /// logged and collapsed to `None` instead of failing the run.
    pub async fn fetch_contribution_calendar(
        &self,
        username: &str,
    ) -> Option<RawContributionCalendar> {
        if !self.has_token {
            tracing::debug!("No GitHub token configured, skipping contribution calendar");
            return None;
        }

        match self.query_calendar(username).await {
            Ok(calendar) => Some(calendar),
            Err(e) => {
                tracing::warn!("Contribution calendar fetch failed for {}: {}", username, e);
                None
            }
        }
    }

    async fn query_calendar(&self, username: &str) -> Result<RawContributionCalendar> {
        let body = graphql::calendar_request(username);
        let request = self.client.post(&self.graphql_url).json(&body).send();

        let response = tokio::time::timeout(REQUEST_TIMEOUT, request)
            .await
            .map_err(|_| Error::Timeout("contribution calendar"))??;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream(format!(
                "GraphQL API responded {} for {}",
                status, username
            )));
        }

        let payload: graphql::GraphQlResponse<graphql::CalendarData> = response.json().await?;

        if let Some(errors) = payload.errors {
            if let Some(first) = errors.first() {
                return Err(Error::Upstream(format!("GraphQL error: {}", first.message)));
            }
        }

        payload
            .data
            .and_then(|d| d.user)
            .map(|u| u.contributions_collection.contribution_calendar.into_raw())
            .ok_or_else(|| Error::Upstream(format!("no contribution data for {}", username)))
    }

    /// One GET racing the shared cancellation token against the per-call
    /// deadline. Both lost races surface as `Timeout`.
    pub(crate) async fn get_guarded(
        &self,
        url: &str,
        what: &'static str,
        cancel: &CancellationToken,
    ) -> Result<Response> {
        tracing::debug!("Fetching: {}", url);
        let request = self.client.get(url).send();

        tokio::select! {
            _ = cancel.cancelled() => Err(Error::Timeout(what)),
            outcome = tokio::time::timeout(REQUEST_TIMEOUT, request) => {
                Ok(outcome.map_err(|_| Error::Timeout(what))??)
            }
        }
    }

    pub(crate) fn check_status(response: Response, username: &str) -> Result<Response> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(username.to_string()));
        }
        if status == StatusCode::TOO_MANY_REQUESTS
            || (status == StatusCode::FORBIDDEN && quota_exhausted(&response))
        {
            return Err(Error::RateLimited);
        }
        if !status.is_success() {
            return Err(Error::Upstream(format!(
                "GitHub responded {} for {}",
                status, username
            )));
        }

        Ok(response)
    }
}

fn quota_exhausted(response: &Response) -> bool {
    response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "0")
        .unwrap_or(false)
}

/// Trip the shared token when a non-isolated branch fails, so sibling
/// branches stop waiting on their own deadlines.
async fn fatal<T, F>(fut: F, cancel: &CancellationToken) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let result = fut.await;
    if result.is_err() {
        cancel.cancel();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("octocat").is_ok());
        assert!(validate_username("a").is_ok());
        assert!(validate_username("mona-lisa").is_ok());
        assert!(validate_username("user123").is_ok());
        assert!(validate_username(&"a".repeat(39)).is_ok());
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(validate_username("").is_err());
        assert!(validate_username("-leading").is_err());
        assert!(validate_username("trailing-").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("under_score").is_err());
        assert!(validate_username(&"a".repeat(40)).is_err());
    }
}
