use sea_orm::DatabaseConnection;

use crate::server::{config::PageSizes, model::kind::EntityKind};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub page_sizes: PageSizes,
}

impl AppState {
    pub fn page_size(&self, kind: EntityKind) -> u64 {
        match kind {
            EntityKind::Store => self.page_sizes.stores,
            EntityKind::Widget => self.page_sizes.widgets,
            EntityKind::Inventory => self.page_sizes.inventories,
            EntityKind::Sensor | EntityKind::Event | EntityKind::Device | EntityKind::Meter => {
                self.page_sizes.complex
            }
        }
    }
}

/// State with the default page sizes, used by tests built on an in-memory database.
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            page_sizes: PageSizes::default(),
        }
    }
}
