//! The assembled service, as the gateway binary serves it.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{state, Reply, ScriptedClient};
use with_ai::urls::{app, BODY_LIMIT};
use with_core::JSON_UTF8;

async fn call(client: std::sync::Arc<ScriptedClient>, req: Request<Body>) -> (Reply, Option<String>) {
    let resp = app(state(client)).oneshot(req).await.unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let allow = resp
        .headers()
        .get(header::ALLOW)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (Reply { status, content_type, json }, allow)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_on_root() {
    let client = ScriptedClient::answering("unused");
    let (reply, _) = call(client.clone(), get("/")).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.content_type, JSON_UTF8);
    assert_eq!(reply.json, json!({"status": "WITH online"}));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let (reply, _) = call(ScriptedClient::answering("unused"), get("/nope")).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.content_type, JSON_UTF8);
    assert_eq!(reply.json["error"], "not_found");
}

#[tokio::test]
async fn get_on_classify_is_json_405() {
    let client = ScriptedClient::answering("critical");
    let (reply, allow) = call(client.clone(), get("/classify")).await;
    assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(reply.content_type, JSON_UTF8);
    assert_eq!(reply.json["error"], "method_not_allowed");
    assert!(allow.unwrap_or_default().contains("POST"));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn get_on_respond_is_json_405() {
    let (reply, _) = call(ScriptedClient::answering("unused"), get("/respond")).await;
    assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(reply.json["error"], "method_not_allowed");
}

#[tokio::test]
async fn oversized_body_is_rejected_before_upstream() {
    let client = ScriptedClient::answering("critical");
    let text = "a".repeat(2 * BODY_LIMIT);
    let req = Request::builder()
        .method("POST")
        .uri("/classify")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "text": text }).to_string()))
        .unwrap();

    let (reply, _) = call(client.clone(), req).await;
    assert_eq!(reply.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(reply.content_type, JSON_UTF8);
    assert_eq!(reply.json["error"], "invalid_request");
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn classify_works_through_the_full_stack() {
    let client = ScriptedClient::answering("Critical");
    let req = Request::builder()
        .method("POST")
        .uri("/classify")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"text": "I want to do something drastic right now"}"#))
        .unwrap();
    let (reply, _) = call(client, req).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json, json!({"state": "critical"}));
}
