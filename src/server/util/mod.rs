//! Utility functions and helpers for server operations.
//!
//! URL construction for entity records, list paging and password hashing.

pub mod links;
pub mod pagination;
pub mod password;
