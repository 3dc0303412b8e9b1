use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auth_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::auth_user_group::Entity")]
    AuthUserGroup,
    #[sea_orm(has_many = "super::auth_group_permission::Entity")]
    AuthGroupPermission,
}

impl Related<super::auth_user_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthUserGroup.def()
    }
}

impl Related<super::auth_group_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthGroupPermission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
