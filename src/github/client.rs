//! GitHub contents API client.
//!
//! One `GET /repos/{owner}/{repo}/contents/{path}` request per listing call;
//! no retries, no caching. Whatever goes wrong with a call collapses into a
//! `DirectoryListError` naming the listed path.

use async_trait::async_trait;
use reqwest::header;

use crate::error::{AppError, DirectoryListError};
use crate::models::ContentEntry;

/// Public API root; point `--api-url` elsewhere for GitHub Enterprise.
pub const GITHUB_API_URL: &str = "https://api.github.com";

const APP_USER_AGENT: &str = concat!("repo-mapper/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";

/// One listing call per directory of a hosted repository.
///
/// The mapper only walks the tree through this seam, so tests can script
/// listings without a network.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// List the entries of `path`, in upstream order. The empty string
    /// denotes the repository root.
    async fn list_directory(&self, path: &str) -> Result<Vec<ContentEntry>, DirectoryListError>;
}

/// Authenticated client bound to one repository coordinate.
pub struct GitHubClient {
    http: reqwest::Client,
    token: String,
    owner: String,
    repo: String,
    api_url: String,
}

impl GitHubClient {
    /// Build a client for `owner/repo`. Fails with `AppError::MissingToken`
    /// when the credential is absent or blank, before any request is made.
    pub fn new(
        token: Option<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Result<Self, AppError> {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(AppError::MissingToken)?;

        Ok(Self {
            http: reqwest::Client::new(),
            token,
            owner: owner.into(),
            repo: repo.into(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url, self.owner, self.repo, path
        )
    }
}

#[async_trait]
impl DirectoryClient for GitHubClient {
    async fn list_directory(&self, path: &str) -> Result<Vec<ContentEntry>, DirectoryListError> {
        let url = self.contents_url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(header::AUTHORIZATION, format!("token {}", self.token))
            .header(header::USER_AGENT, APP_USER_AGENT)
            .header(header::ACCEPT, GITHUB_JSON)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| DirectoryListError::new(path, e))?;

        response
            .json::<Vec<ContentEntry>>()
            .await
            .map_err(|e| DirectoryListError::new(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_to_build_without_a_token() {
        let result = GitHubClient::new(None, "octo", "demo", GITHUB_API_URL);
        assert!(matches!(result, Err(AppError::MissingToken)));
    }

    #[test]
    fn refuses_a_blank_token() {
        let result = GitHubClient::new(Some("   ".to_string()), "octo", "demo", GITHUB_API_URL);
        assert!(matches!(result, Err(AppError::MissingToken)));
    }

    #[test]
    fn contents_url_covers_root_and_subdirectories() {
        let client = GitHubClient::new(
            Some("tok".to_string()),
            "octo",
            "demo",
            "https://api.github.com/",
        )
        .unwrap();

        assert_eq!(
            client.contents_url(""),
            "https://api.github.com/repos/octo/demo/contents/"
        );
        assert_eq!(
            client.contents_url("src/widgets"),
            "https://api.github.com/repos/octo/demo/contents/src/widgets"
        );
    }
}
