pub mod client;
pub mod graphql;
pub mod paginator;

pub use client::{validate_username, GithubClient};
pub use paginator::{PageWalk, Paginator};
