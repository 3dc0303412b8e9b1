//! Database fixtures inserted during test execution.
//!
//! - `user` - users, groups, permissions and memberships
//! - `simple` - stores, widgets and inventories
//! - `complex` - sensors, events, devices and meters

pub mod complex;
pub mod simple;
pub mod user;
