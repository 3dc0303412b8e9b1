//! Server application models and type definitions.
//!
//! This module contains the application state shared by every handler, the entity and
//! permission naming shared by routes and services, and typed session data.

pub mod app;
pub mod kind;
pub mod session;
