//! Repositories for stores, widgets and inventories.

pub mod inventory;
pub mod store;
pub mod widget;
