//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries for one table each and are generic over
//! `ConnectionTrait` so services can run them inside a transaction. Repositories for
//! user-owned records only ever see the rows of the user they are asked about.

pub mod complex;
pub mod permission;
pub mod simple;
pub mod user;
