use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A coded choice together with its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChoiceDto {
    pub value: i16,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SensorDto {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub serial_no: String,
    pub temp_units: ChoiceDto,
    pub pressure_units: ChoiceDto,
    pub alt_units: ChoiceDto,
    pub ws_units: ChoiceDto,
    pub installed: NaiveDate,
    pub climate: bool,
    pub camera: bool,
    pub link: Option<String>,
    pub ulink: Option<String>,
    pub dlink: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub sensor_id: i32,
    pub timestamp: NaiveDateTime,
    pub location: ChoiceDto,
    pub status: ChoiceDto,
    pub camera: ChoiceDto,
    pub avg_temp: Decimal,
    pub avg_pressure: Decimal,
    pub pct_humidity: i32,
    pub altitude: i32,
    pub windspeed: i32,
    pub link: Option<String>,
    pub ulink: Option<String>,
    pub dlink: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeviceDto {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub night_vision: bool,
    pub weather: bool,
    pub link: Option<String>,
    pub ulink: Option<String>,
    pub dlink: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeterDto {
    pub id: i32,
    pub device_id: i32,
    pub location: ChoiceDto,
    pub installed: NaiveDate,
    pub link: Option<String>,
    pub ulink: Option<String>,
    pub dlink: Option<String>,
}
