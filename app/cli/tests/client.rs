//! Backend client tests against a mock chat service.

use axum::{Json, Router, http::StatusCode, routing::post};
use waypoint_cli::{AskError, BackendClient, NO_RESPONSE_TEXT};

/// Bind a mock backend on an ephemeral port and return the port.
async fn spawn(router: Router) -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    port
}

#[tokio::test]
async fn displays_response_text_on_200() {
    let router = Router::new().route(
        "/chat",
        post(|| async { Json(serde_json::json!({ "response": "Paris is lovely" })) }),
    );
    let port = spawn(router).await;

    let client = BackendClient::new(format!("http://127.0.0.1:{port}"));
    let answer = client.ask("Where should I go?").await.unwrap();
    assert_eq!(answer, "Paris is lovely");
}

#[tokio::test]
async fn missing_response_field_falls_back() {
    let router = Router::new().route(
        "/chat",
        post(|| async { Json(serde_json::json!({ "something_else": true })) }),
    );
    let port = spawn(router).await;

    let client = BackendClient::new(format!("http://127.0.0.1:{port}"));
    let answer = client.ask("hi").await.unwrap();
    assert_eq!(answer, NO_RESPONSE_TEXT);
}

#[tokio::test]
async fn non_200_reports_the_status_code() {
    let router = Router::new().route(
        "/chat",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "overloaded") }),
    );
    let port = spawn(router).await;

    let client = BackendClient::new(format!("http://127.0.0.1:{port}"));
    let err = client.ask("hi").await.unwrap_err();
    assert!(matches!(err, AskError::Status(503)));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn connection_refused_reports_transport_description() {
    // Bind then drop to find a port that refuses connections.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = BackendClient::new(format!("http://127.0.0.1:{port}"));
    let err = client.ask("hi").await.unwrap_err();
    assert!(matches!(err, AskError::Transport(_)));
    let message = err.to_string();
    assert!(message.starts_with("Connection failed: "));
    assert!(message.len() > "Connection failed: ".len());
}

#[tokio::test]
async fn trailing_slash_in_base_is_tolerated() {
    let router = Router::new().route(
        "/chat",
        post(|| async { Json(serde_json::json!({ "response": "ok" })) }),
    );
    let port = spawn(router).await;

    let client = BackendClient::new(format!("http://127.0.0.1:{port}/"));
    assert_eq!(client.base(), format!("http://127.0.0.1:{port}"));
    assert_eq!(client.ask("hi").await.unwrap(), "ok");
}
