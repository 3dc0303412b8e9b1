use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreDto {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub link: Option<String>,
    pub ulink: Option<String>,
    pub dlink: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WidgetDto {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub cost: Decimal,
    pub link: Option<String>,
    pub ulink: Option<String>,
    pub dlink: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InventoryDto {
    pub id: i32,
    pub store_id: i32,
    pub widget_id: i32,
    pub quantity: i32,
    pub link: Option<String>,
    pub ulink: Option<String>,
    pub dlink: Option<String>,
}

/// Sum of widget cost over one page of the user's active widgets
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WidgetAggrDto {
    pub title: String,
    pub page: u64,
    pub cost_sum: Decimal,
}

/// Sum of inventory quantity over one page of the user's active inventories
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InventoryAggrDto {
    pub title: String,
    pub page: u64,
    pub quantity_sum: i64,
}
