pub use super::auth_group::Entity as AuthGroup;
pub use super::auth_group_permission::Entity as AuthGroupPermission;
pub use super::auth_permission::Entity as AuthPermission;
pub use super::auth_user::Entity as AuthUser;
pub use super::auth_user_group::Entity as AuthUserGroup;
pub use super::auth_user_permission::Entity as AuthUserPermission;
pub use super::complex_device::Entity as ComplexDevice;
pub use super::complex_event::Entity as ComplexEvent;
pub use super::complex_meter::Entity as ComplexMeter;
pub use super::complex_sensor::Entity as ComplexSensor;
pub use super::simple_inventory::Entity as SimpleInventory;
pub use super::simple_store::Entity as SimpleStore;
pub use super::simple_widget::Entity as SimpleWidget;
