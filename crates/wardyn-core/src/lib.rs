//! Wardyn Core — domain policy for the sign-in gate.
//!
//! This crate provides the policy types shared by every Wardyn crate.
//! It has no internal Wardyn dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`policy`]: Allowed-domain set and email validator

#![doc = include_str!("../README.md")]

pub mod error;
pub mod policy;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use policy::{AllowedDomains, EmailPolicy, RejectReason};
