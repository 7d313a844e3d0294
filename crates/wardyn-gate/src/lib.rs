//! Sign-in gate for the Wardyn domain policy.
//!
//! Provides:
//! - [`SignInEvent`] / [`UserRecord`] — the blocking event delivered by the identity platform
//! - [`Allowance`] — the "proceed" signal, optionally carrying session claims
//! - [`GateError`] / [`ErrorCode`] — the structured deny contract
//! - [`SignInGate`] — fail-closed evaluation of one sign-in attempt

mod error;
mod event;
mod gate;

pub use error::{ErrorCode, GateError};
pub use event::{Allowance, SignInEvent, UserRecord};
pub use gate::{SignInDecision, SignInGate};
