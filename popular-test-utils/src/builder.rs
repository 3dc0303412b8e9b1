//! Declarative test builder.
//!
//! `TestBuilder` collects the tables and fixture users a test needs; everything is
//! created in one go by `build()`.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_auth_tables: bool,
    include_simple_tables: bool,
    include_complex_tables: bool,
    users: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_auth_tables: false,
            include_simple_tables: false,
            include_complex_tables: false,
            users: Vec::new(),
        }
    }

    /// Add the user, group and permission tables.
    pub fn with_auth_tables(mut self) -> Self {
        self.include_auth_tables = true;
        self
    }

    /// Add the store, widget and inventory tables along with the auth tables they depend on.
    pub fn with_simple_tables(mut self) -> Self {
        self.include_auth_tables = true;
        self.include_simple_tables = true;
        self
    }

    /// Add the sensor, event, device and meter tables along with the auth tables they
    /// depend on.
    pub fn with_complex_tables(mut self) -> Self {
        self.include_auth_tables = true;
        self.include_complex_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Tables are created after the table groups above, in the order they were added.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use popular_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), popular_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(AuthUser)
    ///     .with_table(SimpleStore)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an active regular user with the given username during `build()`.
    ///
    /// Requires the auth tables.
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Build the test context, creating all configured tables then inserting fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        let mut all_tables = Vec::new();

        if self.include_auth_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::AuthUser),
                schema.create_table_from_entity(entity::prelude::AuthGroup),
                schema.create_table_from_entity(entity::prelude::AuthPermission),
                schema.create_table_from_entity(entity::prelude::AuthUserGroup),
                schema.create_table_from_entity(entity::prelude::AuthGroupPermission),
                schema.create_table_from_entity(entity::prelude::AuthUserPermission),
            ]);
        }

        if self.include_simple_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::SimpleStore),
                schema.create_table_from_entity(entity::prelude::SimpleWidget),
                schema.create_table_from_entity(entity::prelude::SimpleInventory),
            ]);
        }

        if self.include_complex_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::ComplexSensor),
                schema.create_table_from_entity(entity::prelude::ComplexEvent),
                schema.create_table_from_entity(entity::prelude::ComplexDevice),
                schema.create_table_from_entity(entity::prelude::ComplexMeter),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for username in self.users {
            setup.user().insert_user(&username).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
