//! Multi-tenant CRUD service for the "simple" inventory app and the "complex" sensor app.

pub mod model;
pub mod server;
