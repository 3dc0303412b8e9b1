//! SeaORM entities for the auth, simple and complex tables.

pub mod prelude;

pub mod auth_group;
pub mod auth_group_permission;
pub mod auth_permission;
pub mod auth_user;
pub mod auth_user_group;
pub mod auth_user_permission;
pub mod complex_device;
pub mod complex_event;
pub mod complex_meter;
pub mod complex_sensor;
pub mod sea_orm_active_enums;
pub mod simple_inventory;
pub mod simple_store;
pub mod simple_widget;
