//! Fail-closed evaluation of sign-in attempts.

use std::collections::BTreeMap;

use serde_json::Value;

use wardyn_core::EmailPolicy;

use crate::error::GateError;
use crate::event::{Allowance, SignInEvent};

/// Outcome of one gate evaluation: proceed, or deny with a structured error.
pub type SignInDecision = std::result::Result<Allowance, GateError>;

/// The sign-in gate.
///
/// Invoked once per authentication attempt, before the platform finalizes
/// sign-in. Stateless beyond the immutable policy and claim configuration,
/// so one instance serves concurrent attempts behind an `Arc`.
#[derive(Debug, Clone)]
pub struct SignInGate {
    policy: EmailPolicy,
    claims: BTreeMap<String, Value>,
}

impl SignInGate {
    /// Create a gate over the given policy. No claims are attached by default.
    pub fn new(policy: EmailPolicy) -> Self {
        Self {
            policy,
            claims: BTreeMap::new(),
        }
    }

    /// Attach a session claim to every allowance this gate issues.
    pub fn with_claim(mut self, name: impl Into<String>, value: Value) -> Self {
        self.claims.insert(name.into(), value);
        self
    }

    /// The policy this gate evaluates against.
    pub fn policy(&self) -> &EmailPolicy {
        &self.policy
    }

    /// Evaluate one sign-in attempt.
    ///
    /// Emits one diagnostic record per attempt (email and outcome). The whole
    /// path is `Result`-typed; nothing here panics or fails open.
    pub fn evaluate(&self, event: &SignInEvent) -> SignInDecision {
        let email = event.email();
        match self.policy.evaluate(email) {
            Ok(()) => {
                log::info!("sign-in allowed for {}", email.unwrap_or("<missing>"));
                Ok(Allowance {
                    session_claims: self.claims.clone(),
                })
            }
            Err(reason) => {
                log::warn!(
                    "sign-in blocked for {}: {reason}",
                    email.unwrap_or("<missing>")
                );
                Err(GateError::invalid_argument(self.denial_message()))
            }
        }
    }

    /// The user-facing deny message, naming the approved domain(s).
    pub fn denial_message(&self) -> String {
        let domains = self
            .policy
            .allowed_domains()
            .iter()
            .map(|domain| format!("@{domain}"))
            .collect::<Vec<_>>()
            .join(" or ");
        format!("Access is restricted to approved sign-in domains. Please use your {domains} email address.")
    }
}
