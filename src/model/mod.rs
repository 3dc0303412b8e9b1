//! Response bodies shared by every controller.

pub mod api;
pub mod complex;
pub mod simple;
pub mod user;
