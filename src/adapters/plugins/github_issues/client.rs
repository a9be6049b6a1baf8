//! GitHub HTTP client with rate-limit handling.
//!
//! Creates issues through the GitHub REST API v3. After every response the
//! rate-limit headers are inspected; when the quota runs low or GitHub
//! answers 403, the client sleeps until the advertised reset and sends the
//! same request again.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};

use crate::domain::errors::{DispatchError, DispatchResult};
use crate::domain::models::{GitHubConfig, IssueRecord, MigrationTarget, ThrottleConfig};
use crate::domain::ports::{Clock, IssueDispatcher};
use crate::infrastructure::credentials::GitHubToken;

use super::models::GitHubCreateIssueRequest;
use super::rate_limit::RateLimitState;

/// HTTP client for the GitHub REST API v3.
#[derive(Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client.
    http: Client,
    /// Fine-grained GitHub token.
    token: GitHubToken,
    /// API root, e.g. `https://api.github.com`.
    base_url: String,
    /// Sent as `X-GitHub-Api-Version`.
    api_version: String,
    /// Wait for the reset once fewer requests than this remain.
    remaining_threshold: i64,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("token", &self.token)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("remaining_threshold", &self.remaining_threshold)
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Create a client from configuration.
    pub fn new(
        token: GitHubToken,
        github: &GitHubConfig,
        throttle: &ThrottleConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(github.timeout_secs))
            .user_agent(github.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            token,
            base_url: github.api_base_url.trim_end_matches('/').to_string(),
            api_version: github.api_version.clone(),
            remaining_threshold: throttle.remaining_threshold,
            clock,
        })
    }

    fn issues_url(&self, target: &MigrationTarget) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.base_url, target.owner, target.repo
        )
    }

    /// Send one already-serialized create-issue request.
    async fn send(&self, url: &str, body: &[u8]) -> DispatchResult<Response> {
        let response = self
            .http
            .post(url)
            .header(ACCEPT, "application/vnd.github+json")
            .header(AUTHORIZATION, format!("Bearer {}", self.token.expose()))
            .header("X-GitHub-Api-Version", &self.api_version)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_vec())
            .send()
            .await?;
        Ok(response)
    }

    /// Sleep until the wall clock reaches the reset instant.
    async fn wait_for_reset(&self, issue_id: &str, rate_limit: &RateLimitState) -> DispatchResult<()> {
        while self.clock.now() < rate_limit.reset {
            let eta = rate_limit.eta(self.clock.now())?;
            tracing::warn!(
                issue_id,
                remaining = rate_limit.remaining,
                reset = %rate_limit.reset,
                eta_secs = eta.as_secs(),
                "Waiting {}s to pass rate limit threshold",
                eta.as_secs()
            );
            self.clock.sleep(eta).await;
        }
        Ok(())
    }
}

#[async_trait]
impl IssueDispatcher for GitHubClient {
    async fn create_issue(
        &self,
        record: &IssueRecord,
        target: &MigrationTarget,
    ) -> DispatchResult<()> {
        let url = self.issues_url(target);
        let body = serde_json::to_vec(&GitHubCreateIssueRequest::from_record(record, target))?;

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            tracing::debug!(issue_id = %record.issue_id, attempt, "sending create-issue request");

            let response = self.send(&url, &body).await?;
            let status = response.status();
            let rate_limit = RateLimitState::from_headers(response.headers())?;
            tracing::debug!(
                issue_id = %record.issue_id,
                status = status.as_u16(),
                remaining = rate_limit.remaining,
                "received create-issue response"
            );

            if rate_limit.is_throttled(status, self.remaining_threshold) {
                self.wait_for_reset(&record.issue_id, &rate_limit).await?;
                continue;
            }

            if status != StatusCode::CREATED {
                return Err(DispatchError::UnexpectedStatus(status.as_u16()));
            }
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::ManualClock;
    use chrono::DateTime;

    fn client(base_url: &str) -> GitHubClient {
        let github = GitHubConfig {
            api_base_url: base_url.to_string(),
            ..GitHubConfig::default()
        };
        let clock = ManualClock::new(DateTime::from_timestamp(1_700_000_000, 0).unwrap());
        GitHubClient::new(
            GitHubToken::new("github_pat_test"),
            &github,
            &ThrottleConfig::default(),
            Arc::new(clock),
        )
        .unwrap()
    }

    fn target() -> MigrationTarget {
        MigrationTarget {
            owner: "octocat".to_string(),
            repo: "hello-world".to_string(),
            label: "youtrack".to_string(),
            milestone: 1,
        }
    }

    #[test]
    fn test_issues_url() {
        let client = client("https://api.github.com");
        assert_eq!(
            client.issues_url(&target()),
            "https://api.github.com/repos/octocat/hello-world/issues"
        );
    }

    #[test]
    fn test_issues_url_trims_trailing_slash() {
        let client = client("http://127.0.0.1:1234/");
        assert_eq!(
            client.issues_url(&target()),
            "http://127.0.0.1:1234/repos/octocat/hello-world/issues"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", client("https://api.github.com"));
        assert!(!debug.contains("github_pat_test"));
    }
}
