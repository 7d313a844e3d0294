//! Property-based tests for the email validator.
