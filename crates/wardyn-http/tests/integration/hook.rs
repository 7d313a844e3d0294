//! End-to-end tests for the blocking hook route.

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use wardyn_http::routes;

use crate::common::{post_sign_in, test_gate, test_router};

#[tokio::test]
async fn test_full_platform_event_is_allowed() {
    let payload = json!({
        "eventId": "evt_48121",
        "eventType": "beforeSignIn",
        "data": {
            "uid": "u_102",
            "email": "marta@jhmh.com",
            "displayName": "Marta",
            "emailVerified": true
        }
    });
    let (status, body) = post_sign_in(test_router(), payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_uppercase_and_padded_email_is_allowed() {
    let payload = json!({ "data": { "email": "  MARTA@JHMH.COM " } });
    let (status, _) = post_sign_in(test_router(), payload).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_foreign_domain_deny_carries_the_contract_fields() {
    let payload = json!({ "data": { "email": "marta@gmail.com" } });
    let (status, body) = post_sign_in(test_router(), payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("@jhmh.com"), "message was: {message}");
}

#[tokio::test]
async fn test_subdomain_is_denied() {
    let payload = json!({ "data": { "email": "marta@sso.jhmh.com" } });
    let (status, body) = post_sign_in(test_router(), payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_event_without_email_is_denied() {
    let payload = json!({ "eventId": "evt_9", "data": { "uid": "u_9" } });
    let (status, body) = post_sign_in(test_router(), payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_claims_configured_on_the_gate_reach_the_platform() {
    let gate = test_gate()
        .with_claim("role", json!("employee"))
        .with_claim("domain", json!("jhmh.com"));
    let router = routes(Arc::new(gate));
    let payload = json!({ "data": { "email": "marta@jhmh.com" } });
    let (status, body) = post_sign_in(router, payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "sessionClaims": { "domain": "jhmh.com", "role": "employee" } })
    );
}

#[tokio::test]
async fn test_decisions_are_independent_across_requests() {
    let router = test_router();
    let (allowed, _) = post_sign_in(
        router.clone(),
        json!({ "data": { "email": "a@jhmh.com" } }),
    )
    .await;
    let (blocked, _) = post_sign_in(
        router.clone(),
        json!({ "data": { "email": "a@gmail.com" } }),
    )
    .await;
    let (allowed_again, _) =
        post_sign_in(router, json!({ "data": { "email": "a@jhmh.com" } })).await;
    assert_eq!(allowed, StatusCode::OK);
    assert_eq!(blocked, StatusCode::BAD_REQUEST);
    assert_eq!(allowed_again, StatusCode::OK);
}
