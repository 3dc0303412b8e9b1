use std::collections::BTreeSet;

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

pub struct PermissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PermissionRepository<'a, C> {
    /// Creates a new instance of [`PermissionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the permission with `codename`, inserting it when missing.
    pub async fn get_or_create_permission(
        &self,
        app_label: &str,
        codename: &str,
        name: &str,
    ) -> Result<entity::auth_permission::Model, DbErr> {
        if let Some(permission) = entity::prelude::AuthPermission::find()
            .filter(entity::auth_permission::Column::Codename.eq(codename))
            .one(self.db)
            .await?
        {
            return Ok(permission);
        }

        entity::prelude::AuthPermission::insert(entity::auth_permission::ActiveModel {
            app_label: ActiveValue::Set(app_label.to_string()),
            codename: ActiveValue::Set(codename.to_string()),
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_or_create_group(
        &self,
        name: &str,
    ) -> Result<entity::auth_group::Model, DbErr> {
        if let Some(group) = entity::prelude::AuthGroup::find()
            .filter(entity::auth_group::Column::Name.eq(name))
            .one(self.db)
            .await?
        {
            return Ok(group);
        }

        entity::prelude::AuthGroup::insert(entity::auth_group::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Grants `permission_id` to `group_id`; granting twice is a no-op.
    pub async fn grant_group_permission(
        &self,
        group_id: i32,
        permission_id: i32,
    ) -> Result<(), DbErr> {
        let existing = entity::prelude::AuthGroupPermission::find()
            .filter(entity::auth_group_permission::Column::GroupId.eq(group_id))
            .filter(entity::auth_group_permission::Column::PermissionId.eq(permission_id))
            .one(self.db)
            .await?;

        if existing.is_none() {
            entity::prelude::AuthGroupPermission::insert(
                entity::auth_group_permission::ActiveModel {
                    group_id: ActiveValue::Set(group_id),
                    permission_id: ActiveValue::Set(permission_id),
                    ..Default::default()
                },
            )
            .exec(self.db)
            .await?;
        }

        Ok(())
    }

    /// Every `<app_label>.<codename>` held by the user directly or through a group.
    pub async fn get_user_permissions(&self, user_id: i32) -> Result<BTreeSet<String>, DbErr> {
        let direct = entity::prelude::AuthPermission::find()
            .inner_join(entity::auth_user_permission::Entity)
            .filter(entity::auth_user_permission::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        let group_ids: Vec<i32> = entity::prelude::AuthUserGroup::find()
            .select_only()
            .column(entity::auth_user_group::Column::GroupId)
            .filter(entity::auth_user_group::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await?;

        let via_groups = if group_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::AuthPermission::find()
                .inner_join(entity::auth_group_permission::Entity)
                .filter(entity::auth_group_permission::Column::GroupId.is_in(group_ids))
                .all(self.db)
                .await?
        };

        Ok(direct
            .into_iter()
            .chain(via_groups)
            .map(|p| format!("{}.{}", p.app_label, p.codename))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    mod get_or_create {
        use popular_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::server::data::permission::PermissionRepository;

        /// Expect the same permission back when asked twice
        #[tokio::test]
        async fn permission_is_created_once() -> Result<(), TestError> {
            let test = TestBuilder::new().with_auth_tables().build().await?;
            let repo = PermissionRepository::new(&test.db);

            let first = repo
                .get_or_create_permission("simple", "add_store", "Can add store")
                .await?;
            let second = repo
                .get_or_create_permission("simple", "add_store", "Can add store")
                .await?;

            assert_eq!(first.id, second.id);
            let count = entity::prelude::AuthPermission::find().all(&test.db).await?.len();
            assert_eq!(count, 1);

            Ok(())
        }

        #[tokio::test]
        async fn group_is_created_once() -> Result<(), TestError> {
            let test = TestBuilder::new().with_auth_tables().build().await?;
            let repo = PermissionRepository::new(&test.db);

            let first = repo.get_or_create_group("add").await?;
            let second = repo.get_or_create_group("add").await?;

            assert_eq!(first.id, second.id);

            Ok(())
        }

        /// Expect granting the same permission twice to leave one grant
        #[tokio::test]
        async fn grant_is_idempotent() -> Result<(), TestError> {
            let test = TestBuilder::new().with_auth_tables().build().await?;
            let repo = PermissionRepository::new(&test.db);
            let group = repo.get_or_create_group("add").await?;
            let permission = repo
                .get_or_create_permission("simple", "add_store", "Can add store")
                .await?;

            repo.grant_group_permission(group.id, permission.id).await?;
            repo.grant_group_permission(group.id, permission.id).await?;

            let grants = entity::prelude::AuthGroupPermission::find()
                .all(&test.db)
                .await?;
            assert_eq!(grants.len(), 1);

            Ok(())
        }
    }

    mod get_user_permissions {
        use popular_test_utils::prelude::*;

        use crate::server::data::permission::PermissionRepository;

        /// Expect direct and group permissions to be combined
        #[tokio::test]
        async fn combines_direct_and_group_permissions() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_auth_tables().build().await?;
            let user = test
                .user()
                .insert_user_with_permissions("qa", &[("simple", "add_store")])
                .await?;
            let group = test.user().insert_group("change").await?;
            let permission = test
                .user()
                .insert_permission("complex", "change_sensor")
                .await?;
            test.user()
                .grant_group_permission(group.id, permission.id)
                .await?;
            test.user().add_user_to_group(user.id, group.id).await?;

            let permissions = PermissionRepository::new(&test.db)
                .get_user_permissions(user.id)
                .await?;

            assert!(permissions.contains("simple.add_store"));
            assert!(permissions.contains("complex.change_sensor"));
            assert_eq!(permissions.len(), 2);

            Ok(())
        }

        /// Expect another user's grants not to leak
        #[tokio::test]
        async fn ignores_other_users() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_auth_tables().build().await?;
            test.user()
                .insert_user_with_permissions("owner", &[("simple", "delete_store")])
                .await?;
            let other = test.user().insert_user("other").await?;

            let permissions = PermissionRepository::new(&test.db)
                .get_user_permissions(other.id)
                .await?;

            assert!(permissions.is_empty());

            Ok(())
        }
    }
}
