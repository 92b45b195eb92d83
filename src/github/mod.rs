pub mod client;
pub mod mapper;

pub use client::{GITHUB_API_URL, GitHubClient};
pub use mapper::{RepoMapper, SharedMapper};
