//! Tests for the combined status request against a local stub.

use crate::common::{CountingStub, StubServer};
use check_local_status::{CheckOutcome, CheckRequest, GitHubClient, GitHubError, StatusState, check};
use serde_json::json;

fn client_for(stub: &StubServer, token: &str) -> GitHubClient {
    GitHubClient::builder()
        .personal_token(token)
        .base_uri(stub.base_uri.clone())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_request_path_and_headers() {
    let body = json!({"state": "success", "statuses": []}).to_string();
    let stub = StubServer::start("200 OK", body).await;
    let client = client_for(&stub, "secret-token");

    let combined = client
        .get_combined_status("octo/widgets", "abc123")
        .await
        .unwrap();
    assert!(combined.statuses.is_empty());

    let request = stub.received().await;
    assert!(request.starts_with("get /repos/octo/widgets/commits/abc123/status http/1.1"));
    assert!(request.contains("authorization: bearer secret-token"));
    assert!(request.contains("accept: application/vnd.github+json"));
    assert!(request.contains("x-github-api-version: 2022-11-28"));
}

#[tokio::test]
async fn test_check_passes_on_success() {
    let body = json!({
        "statuses": [
            {"context": "ci/build", "state": "success", "id": 1},
            {"context": "ci/lint", "state": "pending", "id": 2}
        ]
    })
    .to_string();
    let stub = StubServer::start("200 OK", body).await;
    let client = client_for(&stub, "t");

    let request = CheckRequest::new("octo/widgets", "abc123", "t", "ci/build");
    let outcome = check(&client, request).await.unwrap();
    assert_eq!(
        outcome,
        CheckOutcome::Passed {
            context: "ci/build".to_string()
        }
    );
}

#[tokio::test]
async fn test_check_reports_pending() {
    let body = json!({
        "statuses": [
            {"context": "ci/build", "state": "success"},
            {"context": "ci/lint", "state": "pending"}
        ]
    })
    .to_string();
    let stub = StubServer::start("200 OK", body).await;
    let client = client_for(&stub, "t");

    let request = CheckRequest::new("octo/widgets", "abc123", "t", "ci/lint");
    let outcome = check(&client, request).await.unwrap();
    assert_eq!(
        outcome,
        CheckOutcome::NotSuccessful {
            context: "ci/lint".to_string(),
            state: StatusState::Pending,
        }
    );
}

#[tokio::test]
async fn test_missing_statuses_key_reads_as_missing() {
    let stub = StubServer::start("200 OK", json!({"state": "pending"}).to_string()).await;
    let client = client_for(&stub, "t");

    let request = CheckRequest::new("octo/widgets", "abc123", "t", "ci/build");
    let outcome = check(&client, request).await.unwrap();
    assert!(matches!(outcome, CheckOutcome::Missing { .. }));
}

#[tokio::test]
async fn test_not_found_is_an_error() {
    let body = json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest"
    })
    .to_string();
    let stub = StubServer::start("404 Not Found", body).await;
    let client = client_for(&stub, "t");

    let result = client.get_combined_status("octo/widgets", "abc123").await;
    assert!(matches!(result, Err(GitHubError::Octocrab(_))));
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let stub = StubServer::start("200 OK", "{not json").await;
    let client = client_for(&stub, "t");

    let result = client.get_combined_status("octo/widgets", "abc123").await;
    assert!(matches!(result, Err(GitHubError::Octocrab(_))));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let body = json!({"message": "Server Error"}).to_string();
    let stub = CountingStub::start("500 Internal Server Error", body).await;
    let client = GitHubClient::builder()
        .personal_token("t")
        .base_uri(stub.base_uri.clone())
        .build()
        .unwrap();

    let result = client.get_combined_status("octo/widgets", "abc123").await;
    assert!(matches!(result, Err(GitHubError::Octocrab(_))));
    assert_eq!(stub.hits(), 1);
}
