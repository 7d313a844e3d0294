//! End-to-end tests for the liveness probe.

use axum::http::StatusCode;

use crate::common::{get, test_router};

#[tokio::test]
async fn test_healthz_is_healthy_with_a_sane_policy() {
    let (status, body) = get(test_router(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_healthz_probes_both_directions() {
    let (_, body) = get(test_router(), "/healthz").await;
    let checks = body["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 2);
    assert_eq!(checks[0]["email"], "probe@jhmh.com");
    assert_eq!(checks[0]["allowed"], true);
    assert_eq!(checks[1]["allowed"], false);
    assert_eq!(checks[1]["expected"], false);
}
