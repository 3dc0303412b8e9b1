pub use sea_orm_migration::prelude::*;

mod m20251017_000001_auth_user;
mod m20251017_000002_auth_group;
mod m20251017_000003_auth_membership;
mod m20251017_000004_simple_store;
mod m20251017_000005_simple_widget;
mod m20251017_000006_simple_inventory;
mod m20251017_000007_complex_sensor;
mod m20251017_000008_complex_event;
mod m20251017_000009_complex_device;
mod m20251017_000010_complex_meter;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_auth_user::Migration),
            Box::new(m20251017_000002_auth_group::Migration),
            Box::new(m20251017_000003_auth_membership::Migration),
            Box::new(m20251017_000004_simple_store::Migration),
            Box::new(m20251017_000005_simple_widget::Migration),
            Box::new(m20251017_000006_simple_inventory::Migration),
            Box::new(m20251017_000007_complex_sensor::Migration),
            Box::new(m20251017_000008_complex_event::Migration),
            Box::new(m20251017_000009_complex_device::Migration),
            Box::new(m20251017_000010_complex_meter::Migration),
        ]
    }
}
