use std::net::SocketAddr;

use callback_rs::{CallbackServer, Config};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::sync::oneshot;

// 启动一个监听随机端口的实例
async fn spawn_server() -> (SocketAddr, oneshot::Sender<()>) {
    let server = CallbackServer::new(Config::new(0)).bind().await.unwrap();
    let port = server.local_addr().unwrap().port();
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let _ = server
            .serve_with_shutdown(async {
                let _ = rx.await;
            })
            .await;
    });

    (SocketAddr::from(([127, 0, 0, 1], port)), tx)
}

#[tokio::test]
async fn test_post_callback_over_http() {
    let (addr, _shutdown) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/callbacks", addr))
        .json(&json!({"event": "ping", "id": 42}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "Callback received"}));

    let response = client
        .post(format!("http://{}/callbacks", addr))
        .header("content-type", "application/json")
        .body("null")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Invalid JSON"}));
}

#[tokio::test]
async fn test_independent_instances() {
    let (first, _a) = spawn_server().await;
    let (second, _b) = spawn_server().await;
    assert_ne!(first.port(), second.port());

    let client = reqwest::Client::new();
    for addr in [first, second] {
        let response = client
            .post(format!("http://{}/callbacks", addr))
            .body("not json")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
