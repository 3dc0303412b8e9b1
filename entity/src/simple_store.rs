use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "simple_store")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_by: i32,
    #[sea_orm(column_type = "String(StringLen::N(20))", unique)]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(20))", unique)]
    pub location: String,
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
    #[sea_orm(has_many = "super::simple_inventory::Entity")]
    SimpleInventory,
}

impl Related<super::auth_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthUser.def()
    }
}

impl Related<super::simple_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SimpleInventory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
