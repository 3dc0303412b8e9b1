//! Store, widget and inventory services.

pub mod inventory;
pub mod store;
pub mod widget;
