pub mod inventory;
pub mod store;
pub mod widget;
