use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "simple_inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_by: i32,
    pub store_id: i32,
    pub widget_id: i32,
    pub quantity: i32,
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
        belongs_to = "super::simple_store::Entity",
        from = "Column::StoreId",
        to = "super::simple_store::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    SimpleStore,
    #[sea_orm(
        belongs_to = "super::simple_widget::Entity",
        from = "Column::WidgetId",
        to = "super::simple_widget::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    SimpleWidget,
}

impl Related<super::auth_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthUser.def()
    }
}

impl Related<super::simple_store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SimpleStore.def()
    }
}

impl Related<super::simple_widget::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SimpleWidget.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
