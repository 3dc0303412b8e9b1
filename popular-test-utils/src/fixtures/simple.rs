use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn simple<'a>(&'a mut self) -> SimpleFixtures<'a> {
        SimpleFixtures { setup: self }
    }
}

pub struct SimpleFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> SimpleFixtures<'a> {
    pub async fn insert_store(
        &self,
        user_id: i32,
        name: &str,
        location: &str,
    ) -> Result<entity::simple_store::Model, TestError> {
        Ok(
            entity::prelude::SimpleStore::insert(entity::simple_store::ActiveModel {
                created_by: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                location: ActiveValue::Set(location.to_string()),
                deleted: ActiveValue::Set(false),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_widget(
        &self,
        user_id: i32,
        name: &str,
        sku: &str,
        cost: Decimal,
    ) -> Result<entity::simple_widget::Model, TestError> {
        Ok(
            entity::prelude::SimpleWidget::insert(entity::simple_widget::ActiveModel {
                created_by: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                sku: ActiveValue::Set(sku.to_string()),
                cost: ActiveValue::Set(cost),
                deleted: ActiveValue::Set(false),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_inventory(
        &self,
        user_id: i32,
        store_id: i32,
        widget_id: i32,
        quantity: i32,
    ) -> Result<entity::simple_inventory::Model, TestError> {
        Ok(
            entity::prelude::SimpleInventory::insert(entity::simple_inventory::ActiveModel {
                created_by: ActiveValue::Set(user_id),
                store_id: ActiveValue::Set(store_id),
                widget_id: ActiveValue::Set(widget_id),
                quantity: ActiveValue::Set(quantity),
                deleted: ActiveValue::Set(false),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a store, a widget and an inventory linking them, all owned by `user_id`.
    ///
    /// `suffix` keeps the unique store and widget columns distinct across calls.
    pub async fn insert_inventory_with_parents(
        &self,
        user_id: i32,
        suffix: u32,
        quantity: i32,
    ) -> Result<entity::simple_inventory::Model, TestError> {
        let store = self
            .insert_store(
                user_id,
                &format!("store{}", suffix),
                &format!("location{}", suffix),
            )
            .await?;
        let widget = self
            .insert_widget(
                user_id,
                &format!("widget{}", suffix),
                &format!("{:03}-000-00", suffix % 1000),
                Decimal::ZERO,
            )
            .await?;

        self.insert_inventory(user_id, store.id, widget.id, quantity)
            .await
    }
}
