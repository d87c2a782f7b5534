use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use bookchain::{Block, BookId, Ledger, LedgerConfig};
use bookchain_server::{BookchainServer, ServerConfig};
use tower::util::ServiceExt;

fn server() -> BookchainServer {
    BookchainServer::new(ServerConfig::default()).unwrap()
}

async fn send(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn health_endpoint() {
    let (status, body) = send(server().router(), "GET", "/health", "").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn list_starts_with_genesis() {
    let (status, body) = send(server().router(), "GET", "/", "").await;
    assert_eq!(status, StatusCode::OK);

    let blocks: Vec<Block> = serde_json::from_slice(&body).unwrap();
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].is_genesis());
}

#[tokio::test]
async fn submit_then_list() {
    let server = server();

    let (status, body) = send(
        server.router(),
        "POST",
        "/",
        r#"{"book_id":"b1","user":"alice","checkout_date":"2024-01-01"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let block: Block = serde_json::from_slice(&body).unwrap();
    assert_eq!(block.position(), 1);

    let (_, body) = send(server.router(), "GET", "/", "").await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json[1]["Data"]["user"], "alice");
    assert_eq!(json[1]["PrevHash"], json[0]["Hash"]);
    assert_eq!(json[1]["Hash"], block.hash().to_hex());
}

#[tokio::test]
async fn malformed_checkout_is_bad_request() {
    let server = server();

    let (status, body) = send(server.router(), "POST", "/", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("malformed input"));

    let (status, _) = send(
        server.router(),
        "POST",
        "/",
        r#"{"book_id":"b1","user":"alice","is_genesis":true}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(server.ledger().len().unwrap(), 1);
}

#[tokio::test]
async fn new_book_mints_id() {
    let (status, body) = send(
        server().router(),
        "POST",
        "/new",
        r#"{"title":"Dune","author":"Frank Herbert","publish_date":"1965-08-01","isbn":"978-0441013593"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json["id"],
        BookId::derive("978-0441013593", "1965-08-01").to_hex()
    );
    assert_eq!(json["title"], "Dune");
}

#[tokio::test]
async fn validate_reports_healthy_chain() {
    let ledger = Arc::new(Ledger::new(LedgerConfig::default()).unwrap());
    let server = BookchainServer::with_ledger(ServerConfig::default(), Arc::clone(&ledger));
    ledger
        .submit_json(br#"{"book_id":"b1","user":"alice","checkout_date":"d"}"#)
        .unwrap();

    let (status, body) = send(server.router(), "GET", "/validate", "").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["length"], 2);
    assert!(json.get("error").is_none());
}
