use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Location;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "complex_meter")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_by: i32,
    pub device_id: i32,
    pub location: Location,
    pub installed: Date,
    pub deleted: bool,
    pub link: Option<String>,
    pub ulink: Option<String>,
    pub dlink: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::auth_user::Entity",
        from = "Column::CreatedBy",
        to = "super::auth_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AuthUser,
    #[sea_orm(
        belongs_to = "super::complex_device::Entity",
        from = "Column::DeviceId",
        to = "super::complex_device::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ComplexDevice,
}

impl Related<super::auth_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthUser.def()
    }
}

impl Related<super::complex_device::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComplexDevice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
