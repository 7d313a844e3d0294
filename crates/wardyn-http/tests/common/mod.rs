//! Common test utilities and harness for Wardyn HTTP integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use wardyn_core::{AllowedDomains, EmailPolicy};
use wardyn_gate::SignInGate;
use wardyn_http::routes;

/// A gate restricted to `jhmh.com`, as deployed.
pub fn test_gate() -> SignInGate {
    let policy = EmailPolicy::new(AllowedDomains::new(["jhmh.com"]).unwrap()).unwrap();
    SignInGate::new(policy)
}

/// A router over [`test_gate`].
pub fn test_router() -> Router {
    routes(Arc::new(test_gate()))
}

/// POST a sign-in event body and decode the JSON answer.
pub async fn post_sign_in(router: Router, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/hooks/before-sign-in")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(router, request).await
}

/// GET a path and decode the JSON answer.
pub async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}
