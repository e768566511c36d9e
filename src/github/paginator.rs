use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::github::client::GithubClient;

pub struct Paginator<'a> {
    github: &'a GithubClient,
}

/// The records a page walk collected, plus whether it stopped because the
/// page cap was reached rather than because the listing ran dry.
pub struct PageWalk<T> {
    pub items: Vec<T>,
    pub capped: bool,
}

impl<'a> Paginator<'a> {
    pub fn new(github: &'a GithubClient) -> Self {
        Self { github }
    }

    /// Walk the listing sequentially: a short page ends the walk, the page
    /// cap bounds it. Page N+1 is only requested after page N's length is
    /// known.
    pub async fn fetch_pages<T: DeserializeOwned>(
        &self,
        base_url: &str,
        per_page: u32,
        max_pages: u32,
        what: &'static str,
        username: &str,
        cancel: &CancellationToken,
    ) -> Result<PageWalk<T>> {
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            let url = page_url(base_url, per_page, page);

            let response = self.github.get_guarded(&url, what, cancel).await?;
            let response = GithubClient::check_status(response, username)?;

            let batch: Vec<T> = response.json().await?;
            let batch_len = batch.len();
            items.extend(batch);

            match walk_decision(batch_len, per_page, page, max_pages) {
                WalkDecision::Stop { capped } => return Ok(PageWalk { items, capped }),
                WalkDecision::NextPage => page += 1,
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum WalkDecision {
    NextPage,
    Stop { capped: bool },
}

/// A short page ends the walk before the cap is consulted; a full page at
/// the cap stops with `capped` set.
fn walk_decision(batch_len: usize, per_page: u32, page: u32, max_pages: u32) -> WalkDecision {
    if batch_len < per_page as usize {
        WalkDecision::Stop { capped: false }
    } else if page >= max_pages {
        WalkDecision::Stop { capped: true }
    } else {
        WalkDecision::NextPage
    }
}

fn page_url(base_url: &str, per_page: u32, page: u32) -> String {
    let separator = if base_url.contains('?') { "&" } else { "?" };
    format!("{}{}per_page={}&page={}", base_url, separator, per_page, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_appends_query() {
        assert_eq!(
            page_url("https://api.example.com/users/octocat/repos", 100, 2),
            "https://api.example.com/users/octocat/repos?per_page=100&page=2"
        );
    }

    #[test]
    fn test_page_url_extends_existing_query() {
        assert_eq!(
            page_url("https://api.example.com/users/octocat/repos?type=owner", 100, 1),
            "https://api.example.com/users/octocat/repos?type=owner&per_page=100&page=1"
        );
    }

    #[test]
    fn test_short_page_stops_without_cap() {
        // One page of 50 when asking for 100: no second request is issued.
        assert_eq!(
            walk_decision(50, 100, 1, 10),
            WalkDecision::Stop { capped: false }
        );
        assert_eq!(
            walk_decision(0, 100, 1, 10),
            WalkDecision::Stop { capped: false }
        );
    }

    #[test]
    fn test_full_page_continues_until_cap() {
        assert_eq!(walk_decision(100, 100, 1, 10), WalkDecision::NextPage);
        assert_eq!(walk_decision(100, 100, 9, 10), WalkDecision::NextPage);
        assert_eq!(
            walk_decision(100, 100, 10, 10),
            WalkDecision::Stop { capped: true }
        );
    }
}
