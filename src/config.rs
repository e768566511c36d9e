use crate::error::{Error, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Optional: REST calls work anonymously, but the contribution calendar
    /// requires a token and anonymous quota is much smaller.
    pub github_token: Option<String>,
    pub model_api_key: String,
    pub model_name: String,
    pub model_api_url: String,
    pub github_api_url: String,
    pub github_graphql_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        let model_api_key = env::var("MODEL_API_KEY")
            .map_err(|_| Error::Config("MODEL_API_KEY environment variable not set".to_string()))?;

        let model_name = env::var("MODEL_NAME").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        let model_api_url =
            env::var("MODEL_API_URL").unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        let github_api_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| "https://api.github.com".to_string());

        let github_graphql_url = env::var("GITHUB_GRAPHQL_URL")
            .unwrap_or_else(|_| "https://api.github.com/graphql".to_string());

        Ok(Self {
            github_token,
            model_api_key,
            model_name,
            model_api_url,
            github_api_url,
            github_graphql_url,
        })
    }
}
