use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{AltUnits, PressureUnits, TempUnits, WsUnits};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "complex_sensor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_by: i32,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub sku: String,
    #[sea_orm(column_type = "String(StringLen::N(20))", unique)]
    pub serial_no: String,
    pub temp_units: TempUnits,
    pub pressure_units: PressureUnits,
    pub alt_units: AltUnits,
    pub ws_units: WsUnits,
    pub installed: Date,
    pub climate: bool,
    pub camera: bool,
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
    #[sea_orm(has_many = "super::complex_event::Entity")]
    ComplexEvent,
}

impl Related<super::auth_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthUser.def()
    }
}

impl Related<super::complex_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComplexEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
