//! End-to-end webhook receiver tests against the axum router.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use arkashine_status::{PaymentState, StatusStore};
use arkashine_webhook::routes::{self, AppState, SIGNATURE_HEADER};
use arkashine_webhook::signature;

const SECRET: &str = "test_webhook_secret";

fn test_router(dir: &tempfile::TempDir) -> (Router, StatusStore) {
    let store = StatusStore::new(dir.path().join("payment_status.json"));
    let router = routes::router(AppState {
        secret: SECRET.to_string(),
        store: store.clone(),
    });
    (router, store)
}

fn captured_payload(id: &str, amount: i64) -> String {
    serde_json::json!({
        "event": "payment.captured",
        "payload": { "payment": { "entity": {
            "id": id, "amount": amount, "currency": "INR"
        }}}
    })
    .to_string()
}

fn failed_payload(id: &str, reason: &str) -> String {
    serde_json::json!({
        "event": "payment.failed",
        "payload": { "payment": { "entity": {
            "id": id, "error_reason": reason
        }}}
    })
    .to_string()
}

fn signed_post(body: &str) -> Request<Body> {
    post_with_signature(body, &signature::sign(body.as_bytes(), SECRET))
}

fn post_with_signature(body: &str, sig: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/webhook")
        .header(SIGNATURE_HEADER, sig)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("JSON body")
}

#[tokio::test]
async fn captured_event_persists_success() {
    let dir = tempfile::tempdir().unwrap();
    let (router, store) = test_router(&dir);

    let body = captured_payload("pay_123", 100);
    let response = router.oneshot(signed_post(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "processed");

    let map = store.load();
    let record = &map["pay_123"];
    assert_eq!(record.state, PaymentState::Success);
    assert_eq!(record.payment_id.as_deref(), Some("pay_123"));
    assert_eq!(record.amount, Some(100));
    assert_eq!(record.currency.as_deref(), Some("INR"));
}

#[tokio::test]
async fn replaying_captured_event_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let (router, store) = test_router(&dir);

    let body = captured_payload("pay_123", 100);
    let first = router.clone().oneshot(signed_post(&body)).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let before = store.load();

    let second = router.oneshot(signed_post(&body)).await.unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(store.load(), before);
}

#[tokio::test]
async fn captured_does_not_overwrite_terminal_failure() {
    let dir = tempfile::tempdir().unwrap();
    let (router, store) = test_router(&dir);

    let failed = failed_payload("pay_123", "timeout");
    let response = router.clone().oneshot(signed_post(&failed)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let captured = captured_payload("pay_123", 100);
    let response = router.oneshot(signed_post(&captured)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let record = &store.load()["pay_123"];
    assert_eq!(record.state, PaymentState::Failed);
    assert_eq!(record.reason.as_deref(), Some("timeout"));
}

#[tokio::test]
async fn missing_signature_rejected_and_nothing_written() {
    let dir = tempfile::tempdir().unwrap();
    let (router, store) = test_router(&dir);

    let body = captured_payload("pay_123", 100);
    let request = Request::builder()
        .method("POST")
        .uri("/webhook")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!store.path().exists());
}

#[tokio::test]
async fn wrong_signature_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (router, store) = test_router(&dir);

    let body = captured_payload("pay_123", 100);
    let sig = signature::sign(body.as_bytes(), "some_other_secret");
    let response = router.oneshot(post_with_signature(&body, &sig)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid signature");
    assert!(store.load().is_empty());
}

#[tokio::test]
async fn signed_garbage_body_rejected_as_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let (router, store) = test_router(&dir);

    let response = router.oneshot(signed_post("not json at all")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid JSON");
    assert!(store.load().is_empty());
}

#[tokio::test]
async fn unrecognized_event_recorded_as_unknown() {
    let dir = tempfile::tempdir().unwrap();
    let (router, store) = test_router(&dir);

    let body = serde_json::json!({
        "event": "payment.authorized",
        "payload": { "payment": { "entity": { "id": "pay_123" }}}
    })
    .to_string();

    let response = router.oneshot(signed_post(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.load()["pay_123"].state, PaymentState::Unknown);
}

#[tokio::test]
async fn liveness_endpoints_respond() {
    let dir = tempfile::tempdir().unwrap();
    let (router, _store) = test_router(&dir);

    let response = router
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(Request::builder().uri("/webhook").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}
