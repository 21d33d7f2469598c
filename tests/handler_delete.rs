mod common;

use alias_shortener::domain::repositories::UrlRepository;
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_delete_success() {
    let (server, repo) = common::create_test_server();
    repo.save("https://example.com", "del001").await.unwrap();

    let response = server
        .delete("/url/del001")
        .add_header("Authorization", common::VALID_AUTH)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "OK" }));
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_delete_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .delete("/url/nonexistent")
        .add_header("Authorization", common::VALID_AUTH)
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "ERROR", "error": "URL not found" })
    );
}

#[tokio::test]
async fn test_delete_twice_reports_not_found() {
    let (server, repo) = common::create_test_server();
    repo.save("https://example.com", "del002").await.unwrap();

    let first = server
        .delete("/url/del002")
        .add_header("Authorization", common::VALID_AUTH)
        .await;
    assert_eq!(first.json::<Value>()["status"], "OK");

    let second = server
        .delete("/url/del002")
        .add_header("Authorization", common::VALID_AUTH)
        .await;
    assert_eq!(second.json::<Value>()["error"], "URL not found");
}

#[tokio::test]
async fn test_delete_requires_auth() {
    let (server, repo) = common::create_test_server();
    repo.save("https://example.com", "del003").await.unwrap();

    let response = server.delete("/url/del003").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(repo.len(), 1);
}
