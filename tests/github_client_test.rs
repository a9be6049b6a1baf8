/// Integration tests for the GitHub issue dispatcher
///
/// A mockito server stands in for the GitHub REST API and a manual clock
/// stands in for the wall clock, so throttle waits are checked exactly and
/// without actually sleeping.
///
/// Test coverage:
/// - Request shape (headers and JSON body)
/// - Throttling on low remaining quota and on 403
/// - Resend of the identical request after the reset
/// - Final errors: non-201 status, missing rate-limit headers, transport
use std::sync::Arc;
use std::time::Duration;

use chrono::DateTime;
use mockito::{Matcher, Server};
use serde_json::json;

use yt2gh::domain::errors::DispatchError;
use yt2gh::domain::models::{GitHubConfig, IssueRecord, MigrationTarget, ThrottleConfig};
use yt2gh::domain::ports::{Clock, IssueDispatcher};
use yt2gh::infrastructure::clock::ManualClock;
use yt2gh::infrastructure::credentials::GitHubToken;
use yt2gh::GitHubClient;

const T0: i64 = 1_700_000_000;
const ISSUES_PATH: &str = "/repos/octocat/hello-world/issues";

fn start_clock() -> ManualClock {
    ManualClock::new(DateTime::from_timestamp(T0, 0).unwrap())
}

fn client(base_url: &str, clock: &ManualClock) -> GitHubClient {
    let github = GitHubConfig {
        api_base_url: base_url.to_string(),
        timeout_secs: 5,
        ..GitHubConfig::default()
    };
    GitHubClient::new(
        GitHubToken::new("github_pat_test"),
        &github,
        &ThrottleConfig::default(),
        Arc::new(clock.clone()),
    )
    .expect("Failed to create client")
}

fn target() -> MigrationTarget {
    MigrationTarget {
        owner: "octocat".to_string(),
        repo: "hello-world".to_string(),
        label: "youtrack".to_string(),
        milestone: 3,
    }
}

fn record() -> IssueRecord {
    IssueRecord::new("PRJ-1", "Crash on start", "Steps to reproduce")
}

fn expected_body() -> Matcher {
    Matcher::Json(json!({
        "title": "Crash on start",
        "body": "Steps to reproduce",
        "assignees": ["octocat"],
        "milestone": 3,
        "labels": ["youtrack"],
    }))
}

#[tokio::test]
async fn test_create_issue_success_sends_expected_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ISSUES_PATH)
        .match_header("authorization", "Bearer github_pat_test")
        .match_header("accept", "application/vnd.github+json")
        .match_header("x-github-api-version", "2022-11-28")
        .match_header("user-agent", "yt2gh")
        .match_header("content-type", "application/json")
        .match_body(expected_body())
        .with_status(201)
        .with_header("x-ratelimit-remaining", "4999")
        .with_header("x-ratelimit-reset", &(T0 + 3600).to_string())
        .with_body(r#"{"number": 1}"#)
        .expect(1)
        .create_async()
        .await;

    let clock = start_clock();
    let result = client(&server.url(), &clock)
        .create_issue(&record(), &target())
        .await;

    assert!(result.is_ok(), "Expected success, got {result:?}");
    assert!(clock.sleeps().is_empty(), "No throttle wait expected");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_forbidden_waits_for_reset_then_resends_same_request() {
    let mut server = Server::new_async().await;

    // First call: secondary rate limit
    let throttled = server
        .mock("POST", ISSUES_PATH)
        .match_body(expected_body())
        .with_status(403)
        .with_header("x-ratelimit-remaining", "0")
        .with_header("x-ratelimit-reset", &(T0 + 3).to_string())
        .expect(1)
        .create_async()
        .await;

    // Second call: the identical body succeeds
    let created = server
        .mock("POST", ISSUES_PATH)
        .match_body(expected_body())
        .with_status(201)
        .with_header("x-ratelimit-remaining", "4999")
        .with_header("x-ratelimit-reset", &(T0 + 3600).to_string())
        .expect(1)
        .create_async()
        .await;

    let clock = start_clock();
    let result = client(&server.url(), &clock)
        .create_issue(&record(), &target())
        .await;

    assert!(result.is_ok(), "Expected success after wait, got {result:?}");
    assert_eq!(clock.sleeps(), vec![Duration::from_secs(3)]);
    throttled.assert_async().await;
    created.assert_async().await;
}

#[tokio::test]
async fn test_low_remaining_quota_waits_full_eta_before_resend() {
    let mut server = Server::new_async().await;

    let low_quota = server
        .mock("POST", ISSUES_PATH)
        .match_body(expected_body())
        .with_status(201)
        .with_header("x-ratelimit-remaining", "3")
        .with_header("x-ratelimit-reset", &(T0 + 5).to_string())
        .expect(1)
        .create_async()
        .await;

    let after_reset = server
        .mock("POST", ISSUES_PATH)
        .match_body(expected_body())
        .with_status(201)
        .with_header("x-ratelimit-remaining", "5000")
        .with_header("x-ratelimit-reset", &(T0 + 3605).to_string())
        .expect(1)
        .create_async()
        .await;

    let clock = start_clock();
    let result = client(&server.url(), &clock)
        .create_issue(&record(), &target())
        .await;

    assert!(result.is_ok(), "Expected success, got {result:?}");
    assert_eq!(clock.sleeps(), vec![Duration::from_secs(5)]);
    assert!(clock.now().timestamp() >= T0 + 5, "Resend must not happen before the reset");
    low_quota.assert_async().await;
    after_reset.assert_async().await;
}

#[tokio::test]
async fn test_throttled_with_reset_already_passed_resends_without_sleeping() {
    let mut server = Server::new_async().await;

    let stale = server
        .mock("POST", ISSUES_PATH)
        .with_status(403)
        .with_header("x-ratelimit-remaining", "0")
        .with_header("x-ratelimit-reset", &(T0 - 1).to_string())
        .expect(1)
        .create_async()
        .await;

    let created = server
        .mock("POST", ISSUES_PATH)
        .with_status(201)
        .with_header("x-ratelimit-remaining", "4999")
        .with_header("x-ratelimit-reset", &(T0 + 3600).to_string())
        .expect(1)
        .create_async()
        .await;

    let clock = start_clock();
    let result = client(&server.url(), &clock)
        .create_issue(&record(), &target())
        .await;

    assert!(result.is_ok());
    assert!(clock.sleeps().is_empty());
    stale.assert_async().await;
    created.assert_async().await;
}

#[tokio::test]
async fn test_non_created_status_is_final_and_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ISSUES_PATH)
        .with_status(422)
        .with_header("x-ratelimit-remaining", "4999")
        .with_header("x-ratelimit-reset", &(T0 + 3600).to_string())
        .with_body(r#"{"message": "Validation Failed"}"#)
        .expect(1)
        .create_async()
        .await;

    let clock = start_clock();
    let result = client(&server.url(), &clock)
        .create_issue(&record(), &target())
        .await;

    assert!(matches!(result, Err(DispatchError::UnexpectedStatus(422))));
    assert!(clock.sleeps().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_rate_limit_headers_is_fatal_even_on_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ISSUES_PATH)
        .with_status(201)
        .expect(1)
        .create_async()
        .await;

    let clock = start_clock();
    let result = client(&server.url(), &clock)
        .create_issue(&record(), &target())
        .await;

    assert!(matches!(
        result,
        Err(DispatchError::MissingRateLimitHeader(_))
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_reset_header_is_fatal() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ISSUES_PATH)
        .with_status(201)
        .with_header("x-ratelimit-remaining", "4999")
        .with_header("x-ratelimit-reset", "soon")
        .expect(1)
        .create_async()
        .await;

    let clock = start_clock();
    let result = client(&server.url(), &clock)
        .create_issue(&record(), &target())
        .await;

    assert!(matches!(
        result,
        Err(DispatchError::MalformedRateLimitHeader { .. })
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    // Nothing listens on port 1.
    let clock = start_clock();
    let result = client("http://127.0.0.1:1", &clock)
        .create_issue(&record(), &target())
        .await;

    assert!(matches!(result, Err(DispatchError::Transport(_))));
}
