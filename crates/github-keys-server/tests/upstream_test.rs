//! End-to-end tests against a mock GitHub API.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use github_keys_server::cache::{CacheConfig, KeyCache};
use github_keys_server::{AppState, create_router};
use github_keys_source::{GitHubKeySource, KeySourceConfig};
use helpers::TestClient;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer, ttl_seconds: u64) -> TestClient {
    let config = KeySourceConfig::builder()
        .url_template(format!("{}/users/{{username}}/keys", server.uri()))
        .build()
        .unwrap();
    let source = GitHubKeySource::new(config).unwrap();
    let cache = KeyCache::new("octocat", Arc::new(source), CacheConfig { ttl_seconds });

    TestClient::new(create_router(AppState::new(Arc::new(cache))))
}

#[tokio::test]
async fn serves_upstream_keys() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/keys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "key": "ssh-ed25519 AAAAC3Nza"},
            {"id": 2, "key": "ssh-rsa AAAAB3Nza"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 3_600).await;

    for _ in 0..3 {
        let response = client.get("/").await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), "ssh-ed25519 AAAAC3Nza\nssh-rsa AAAAB3Nza\n");
    }

    server.verify().await;
}

#[tokio::test]
async fn upstream_error_status_without_snapshot_is_500() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!([{"key": "keyA"}])))
        .mount(&server)
        .await;

    let client = client_for(&server, 3_600).await;

    client
        .get("/")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_empty_body();
}

#[tokio::test]
async fn zero_ttl_refetches_and_falls_back_to_stale() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"key": "keyA"}])))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server, 0).await;

    client.get("/").await.assert_status(StatusCode::OK);

    // Every access refetches; the malformed body keeps the old keys.
    let response = client.get("/").await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), "keyA\n");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}
