//! Wardyn sign-in domain gate — umbrella crate.
//!
//! Re-exports the Wardyn components for convenience.
//! Use feature flags to enable specific functionality.

#![doc = include_str!("../README.md")]

pub use wardyn_core as core;
pub use wardyn_gate as gate;

#[cfg(feature = "http")]
pub use wardyn_http as http;
