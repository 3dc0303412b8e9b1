use sea_orm::entity::prelude::*;

/// A permission is addressed as `<app_label>.<codename>`, e.g. `simple.add_store`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auth_permission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub app_label: String,
    #[sea_orm(unique)]
    pub codename: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::auth_group_permission::Entity")]
    AuthGroupPermission,
    #[sea_orm(has_many = "super::auth_user_permission::Entity")]
    AuthUserPermission,
}

impl Related<super::auth_group_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthGroupPermission.def()
    }
}

impl Related<super::auth_user_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthUserPermission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
