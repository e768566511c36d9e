use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid username: {0}")]
    InvalidUsername(String),

    #[error("user not found: {0}")]
    NotFound(String),

    #[error("GitHub API rate limit exhausted")]
    RateLimited,

    #[error("timed out waiting for {0}")]
    Timeout(&'static str),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("model returned no content")]
    EmptyModelResponse,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP-status-equivalent classification for the calling layer.
    pub fn status_hint(&self) -> u16 {
        match self {
            Error::InvalidUsername(_) => 400,
            Error::NotFound(_) => 404,
            Error::RateLimited => 429,
            Error::Timeout(_) => 504,
            Error::EmptyModelResponse => 502,
            Error::Upstream(_) | Error::Network(_) => 502,
            Error::Config(_) | Error::Serialization(_) | Error::InvalidHeader(_) => 500,
        }
    }
}
