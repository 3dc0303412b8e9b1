//! Session data models and utilities.
//!
//! Type-safe wrappers for session data stored with tower-sessions (Valkey in production,
//! an in-memory store in tests).

pub mod csrf;
pub mod user;
