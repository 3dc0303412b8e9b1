use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{CameraStatus, Location, Status};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "complex_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_by: i32,
    pub sensor_id: i32,
    pub timestamp: DateTime,
    pub location: Location,
    pub status: Status,
    pub camera: CameraStatus,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub avg_temp: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub avg_pressure: Decimal,
    pub pct_humidity: i32,
    pub altitude: i32,
    pub windspeed: i32,
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
        belongs_to = "super::complex_sensor::Entity",
        from = "Column::SensorId",
        to = "super::complex_sensor::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ComplexSensor,
}

impl Related<super::auth_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthUser.def()
    }
}

impl Related<super::complex_sensor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComplexSensor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
