//! Server application core modules.
//!
//! Routing, authentication and permissions, owner-scoped repositories and services for the
//! simple and complex apps, and the form cleaning that sits between them.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod form;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
