//! HTTP surface for the Wardyn sign-in gate.
//!
//! The identity platform delivers blocking events over HTTP; this crate
//! mounts that surface:
//!
//! - `POST /hooks/before-sign-in` — evaluate one sign-in attempt
//! - `GET /healthz` — liveness probe self-checking the live policy
//!
//! Allowed attempts are answered `200` with the allowance body; denies are
//! answered as `{"error": {"code", "message"}}`, status `400` for client
//! errors and `500` for internal ones. Anything this layer cannot evaluate
//! is converted to an internal deny, never an allow.

mod error;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;

use wardyn_gate::{Allowance, GateError, SignInEvent, SignInGate};

pub use error::{Error, Result};

/// Create an axum `Router` with the gate routes.
pub fn routes(gate: Arc<SignInGate>) -> Router {
    Router::new()
        .route("/hooks/before-sign-in", post(before_sign_in))
        .route("/healthz", get(healthz))
        .with_state(gate)
}

/// Bind `addr` and serve the gate until the process is stopped.
pub async fn serve(addr: SocketAddr, gate: Arc<SignInGate>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("wardyn hook listening on {addr}");
    axum::serve(listener, routes(gate).into_make_service()).await?;
    Ok(())
}

/// The blocking hook.
///
/// A body that does not parse as a sign-in event is a client-error deny;
/// the platform retries nothing on our behalf.
async fn before_sign_in(
    State(gate): State<Arc<SignInGate>>,
    payload: std::result::Result<Json<SignInEvent>, JsonRejection>,
) -> Response {
    let event = match payload {
        Ok(Json(event)) => event,
        Err(rejection) => {
            log::warn!("sign-in blocked: malformed event body: {rejection}");
            return deny_response(&GateError::invalid_argument(format!(
                "malformed sign-in event: {rejection}"
            )));
        }
    };

    match gate.evaluate(&event) {
        Ok(allowance) => allow_response(&allowance),
        Err(deny) => deny_response(&deny),
    }
}

/// Serialize the allowance; a failure here denies closed as INTERNAL.
fn allow_response(allowance: &Allowance) -> Response {
    match serde_json::to_value(allowance) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => {
            log::error!("allowance serialization failed: {err}");
            deny_response(&GateError::internal())
        }
    }
}

/// Build the structured deny body the platform expects.
fn deny_response(deny: &GateError) -> Response {
    let status = if deny.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    let body = json!({
        "error": {
            "code": deny.code,
            "message": deny.message,
        }
    });
    (status, Json(body)).into_response()
}

/// One self-check reported by the liveness probe.
#[derive(Debug, Serialize)]
struct HealthCheck {
    name: &'static str,
    email: String,
    allowed: bool,
    expected: bool,
}

/// Liveness probe response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    checks: Vec<HealthCheck>,
}

/// Probe the live policy with one approved and one foreign address.
///
/// `.invalid` is a reserved TLD, so the foreign probe can never collide
/// with a configured domain.
async fn healthz(State(gate): State<Arc<SignInGate>>) -> Response {
    let policy = gate.policy();
    let approved = policy
        .allowed_domains()
        .iter()
        .next()
        .map(|domain| format!("probe@{domain}"))
        .unwrap_or_default();
    let foreign = "probe@health.invalid".to_string();

    let checks = vec![
        HealthCheck {
            name: "approved domain accepted",
            allowed: policy.is_allowed(Some(&approved)),
            email: approved,
            expected: true,
        },
        HealthCheck {
            name: "foreign domain rejected",
            allowed: policy.is_allowed(Some(&foreign)),
            email: foreign,
            expected: false,
        },
    ];

    let healthy = checks.iter().all(|check| check.allowed == check.expected);
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    let body = HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" },
        version: env!("CARGO_PKG_VERSION"),
        checks,
    };
    (status, Json(body)).into_response()
}
