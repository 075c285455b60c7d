//! HTTP-level tests for the Jira client against a mock server.

use jirabot_core::config::TrackerConfig;
use jirabot_core::ISSUE_FIELDS;
use jirabot_tracker::{IssueTracker, JiraClient, TrackerError};
use serde_json::json;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> JiraClient {
    JiraClient::new(&TrackerConfig {
        base_url: server.uri(),
        email: Some("dev@acme.test".to_string()),
        api_token: Some("token".to_string()),
        max_results: 25,
        timeout_secs: 5,
    })
    .unwrap()
}

fn issue_json(key: &str, summary: &str) -> serde_json::Value {
    json!({
        "key": key,
        "fields": {
            "summary": summary,
            "status": { "name": "To Do" },
            "priority": { "name": "Medium" },
            "created": "2024-03-01T09:15:42.123+0000",
            "updated": "2024-03-02T17:00:00.000+0000",
            "description": "Details here"
        }
    })
}

#[tokio::test]
async fn test_search_sends_query_and_parses_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/2/search"))
        .and(query_param(
            "jql",
            "assignee = currentUser() ORDER BY created DESC",
        ))
        .and(query_param(
            "fields",
            "summary,status,priority,created,updated,description",
        ))
        .and(query_param("maxResults", "25"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "startAt": 0,
            "maxResults": 25,
            "total": 42,
            "issues": [issue_json("ABC-1", "First"), issue_json("ABC-2", "Second")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server)
        .search("assignee = currentUser() ORDER BY created DESC", ISSUE_FIELDS)
        .await
        .unwrap();

    assert_eq!(results.total, 42);
    assert_eq!(results.issues.len(), 2);
    assert_eq!(results.issues[0].key, "ABC-1");
    assert_eq!(results.issues[1].summary, "Second");
    assert_eq!(results.issues[0].status, "To Do");
}

#[tokio::test]
async fn test_search_without_total_counts_returned_issues() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/2/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "issues": [issue_json("ABC-7", "Only")]
        })))
        .mount(&server)
        .await;

    let results = client_for(&server).search("project = ABC", ISSUE_FIELDS).await.unwrap();
    assert_eq!(results.total, 1);
}

#[tokio::test]
async fn test_search_with_no_matches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/2/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "total": 0, "issues": [] })),
        )
        .mount(&server)
        .await;

    let results = client_for(&server).search("project = NONE", ISSUE_FIELDS).await.unwrap();
    assert!(results.is_empty());
    assert_eq!(results.total, 0);
}

#[tokio::test]
async fn test_search_bad_query_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/2/search"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errorMessages": ["Error in the JQL Query"]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).search("bogus ===", ISSUE_FIELDS).await.unwrap_err();
    assert!(matches!(err, TrackerError::Status { status: 400, .. }));
}

#[tokio::test]
async fn test_search_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server).search("x", ISSUE_FIELDS).await.unwrap_err();
    assert!(matches!(err, TrackerError::Auth(_)));
}

#[tokio::test]
async fn test_search_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).search("x", ISSUE_FIELDS).await.unwrap_err();
    assert!(matches!(err, TrackerError::Parse(_)));
}

#[tokio::test]
async fn test_get_issue_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/2/issue/ABC-1"))
        .and(query_param(
            "fields",
            "summary,status,priority,created,updated,description",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(issue_json("ABC-1", "Crash")))
        .expect(1)
        .mount(&server)
        .await;

    let issue = client_for(&server).get_issue("ABC-1", ISSUE_FIELDS).await.unwrap();
    assert_eq!(issue.key, "ABC-1");
    assert_eq!(issue.summary, "Crash");
    assert_eq!(issue.priority.as_deref(), Some("Medium"));
    assert_eq!(issue.description.as_deref(), Some("Details here"));
}

#[tokio::test]
async fn test_get_issue_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/2/issue/ABC-999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errorMessages": ["Issue does not exist or you do not have permission to see it."]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).get_issue("ABC-999", ISSUE_FIELDS).await.unwrap_err();
    assert!(matches!(err, TrackerError::NotFound(ref key) if key == "ABC-999"));
}

#[tokio::test]
async fn test_get_issue_unreachable_host() {
    let client = JiraClient::new(&TrackerConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
        ..TrackerConfig::default()
    })
    .unwrap();

    let err = client.get_issue("ABC-1", ISSUE_FIELDS).await.unwrap_err();
    assert!(matches!(err, TrackerError::Transport(_)));
}
