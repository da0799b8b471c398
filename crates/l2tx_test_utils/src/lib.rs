//! Utilities shared by tests.

/// Secret key helpers.
pub mod secret_key;
