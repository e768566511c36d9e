pub mod analysis;
pub mod config;
pub mod error;
pub mod github;
pub mod llm;
pub mod models;
pub mod report;

pub use analysis::ReportPipeline;
pub use config::Config;
pub use error::{Error, Result};
pub use github::GithubClient;
pub use llm::{ModelProvider, OpenAiProvider};
