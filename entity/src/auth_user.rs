use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auth_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    pub email: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::auth_user_group::Entity")]
    AuthUserGroup,
    #[sea_orm(has_many = "super::auth_user_permission::Entity")]
    AuthUserPermission,
}

impl Related<super::auth_user_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthUserGroup.def()
    }
}

impl Related<super::auth_user_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthUserPermission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
