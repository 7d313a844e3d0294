//! Platform event and response payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The user record carried by a blocking sign-in event.
///
/// Only `email` is consulted by the gate; the remaining fields are kept for
/// diagnostics and forward compatibility with the platform payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    /// Platform-assigned user id.
    pub uid: Option<String>,
    /// The candidate email address, exactly as the platform supplied it.
    pub email: Option<String>,
    /// Display name, if the provider supplied one.
    pub display_name: Option<String>,
    /// Whether the provider has verified the address.
    pub email_verified: bool,
}

/// A blocking sign-in event as delivered by the identity platform.
///
/// The platform invokes the gate exactly once per authentication attempt,
/// synchronously, before finalizing sign-in.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignInEvent {
    /// Platform event id, for correlating logs.
    pub event_id: Option<String>,
    /// Platform event type.
    pub event_type: Option<String>,
    /// The candidate user.
    pub data: UserRecord,
}

impl SignInEvent {
    /// Convenience constructor for an event carrying only an email.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            data: UserRecord {
                email: Some(email.into()),
                ..UserRecord::default()
            },
            ..Self::default()
        }
    }

    /// The candidate email, if the platform supplied one.
    pub fn email(&self) -> Option<&str> {
        self.data.email.as_deref()
    }
}

/// The "proceed" signal for an allowed sign-in.
///
/// `session_claims` is empty unless the gate was configured with claims to
/// attach; when present, the platform merges them into the session token.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allowance {
    /// Claim name → value mappings to attach to the session.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub session_claims: BTreeMap<String, Value>,
}

impl Allowance {
    /// An allowance with no claims attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach one claim.
    pub fn with_claim(mut self, name: impl Into<String>, value: Value) -> Self {
        self.session_claims.insert(name.into(), value);
        self
    }
}
