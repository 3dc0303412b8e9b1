use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{
    AltUnits, CameraStatus, Location, PressureUnits, Status, TempUnits, WsUnits,
};
use rust_decimal::Decimal;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::server::{
    error::form::FormErrors,
    form::{
        checkbox, choice_or, integer_or, normalize, parse_datetime, parse_decimal,
        parse_reference, required, DecimalRules, SERIAL_NO_RE,
    },
};

/// Readings stored with two decimal places and at most five digits.
pub const READING_RULES: DecimalRules = DecimalRules {
    max_digits: 5,
    decimal_places: 2,
    min: None,
    max: None,
};

/// Choice fields carry the numeric code, e.g. `temp_units=1` for Celsius. Omitted choices
/// take the column default.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SensorForm {
    #[validate(length(max = 20))]
    pub name: Option<String>,
    #[validate(length(max = 20))]
    pub sku: Option<String>,
    /// Required on create, ignored on update
    #[validate(
        length(max = 20),
        regex(path = *SERIAL_NO_RE, message = "Enter a valid serial number of letters and digits.")
    )]
    pub serial_no: Option<String>,
    pub temp_units: Option<String>,
    pub pressure_units: Option<String>,
    pub alt_units: Option<String>,
    pub ws_units: Option<String>,
    pub climate: Option<String>,
    pub camera: Option<String>,
    pub csrfmiddlewaretoken: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorInput {
    pub name: String,
    pub sku: String,
    pub temp_units: TempUnits,
    pub pressure_units: PressureUnits,
    pub alt_units: AltUnits,
    pub ws_units: WsUnits,
    pub climate: bool,
    pub camera: bool,
}

/// A sensor to insert; the serial number is fixed from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSensor {
    /// Upper-cased
    pub serial_no: String,
    pub sensor: SensorInput,
}

/// Checkbox value as a browser would submit it
fn checked(value: bool) -> Option<String> {
    value.then(|| "on".to_string())
}

fn code<E: ActiveEnum<Value = i16>>(choice: E) -> Option<String> {
    Some(choice.to_value().to_string())
}

impl SensorForm {
    pub fn initial() -> Self {
        Self {
            temp_units: code(TempUnits::Celsius),
            pressure_units: code(PressureUnits::Atm),
            alt_units: code(AltUnits::Kilometers),
            ws_units: code(WsUnits::KilometersPerHour),
            climate: checked(true),
            ..Default::default()
        }
    }

    pub fn from_model(sensor: &entity::complex_sensor::Model) -> Self {
        Self {
            name: Some(sensor.name.clone()),
            sku: Some(sensor.sku.clone()),
            serial_no: Some(sensor.serial_no.to_uppercase()),
            temp_units: code(sensor.temp_units),
            pressure_units: code(sensor.pressure_units),
            alt_units: code(sensor.alt_units),
            ws_units: code(sensor.ws_units),
            climate: checked(sensor.climate),
            camera: checked(sensor.camera),
            csrfmiddlewaretoken: None,
        }
    }

    /// Clean every field except `serial_no`.
    pub fn clean(self) -> Result<SensorInput, FormErrors> {
        let mut errors = FormErrors::new();
        let input = self.clean_fields(&mut errors, false).map(|(input, _)| input);

        match input {
            Some(input) if errors.is_empty() => Ok(input),
            _ => Err(errors),
        }
    }

    pub fn clean_new(self) -> Result<NewSensor, FormErrors> {
        let mut errors = FormErrors::new();
        let cleaned = self.clean_fields(&mut errors, true);

        match cleaned {
            Some((sensor, Some(serial_no))) if errors.is_empty() => {
                Ok(NewSensor { serial_no, sensor })
            }
            _ => Err(errors),
        }
    }

    fn clean_fields(
        self,
        errors: &mut FormErrors,
        with_serial_no: bool,
    ) -> Option<(SensorInput, Option<String>)> {
        let form = Self {
            name: normalize(self.name),
            sku: normalize(self.sku),
            serial_no: if with_serial_no {
                normalize(self.serial_no).map(|s| s.to_uppercase())
            } else {
                None
            },
            temp_units: normalize(self.temp_units),
            pressure_units: normalize(self.pressure_units),
            alt_units: normalize(self.alt_units),
            ws_units: normalize(self.ws_units),
            climate: normalize(self.climate),
            camera: normalize(self.camera),
            csrfmiddlewaretoken: None,
        };

        if let Err(e) = form.validate() {
            errors.extend_validation(e);
        }

        let name = required(errors, "name", form.name);
        let sku = required(errors, "sku", form.sku);
        let serial_no = if with_serial_no {
            required(errors, "serial_no", form.serial_no)
        } else {
            None
        };
        let temp_units = choice_or(
            errors,
            "temp_units",
            form.temp_units.as_deref(),
            TempUnits::Celsius,
        );
        let pressure_units = choice_or(
            errors,
            "pressure_units",
            form.pressure_units.as_deref(),
            PressureUnits::Atm,
        );
        let alt_units = choice_or(
            errors,
            "alt_units",
            form.alt_units.as_deref(),
            AltUnits::Kilometers,
        );
        let ws_units = choice_or(
            errors,
            "ws_units",
            form.ws_units.as_deref(),
            WsUnits::KilometersPerHour,
        );

        let (Some(name), Some(sku), Some(temp_units), Some(pressure_units), Some(alt_units), Some(ws_units)) =
            (name, sku, temp_units, pressure_units, alt_units, ws_units)
        else {
            return None;
        };

        Some((
            SensorInput {
                name,
                sku,
                temp_units,
                pressure_units,
                alt_units,
                ws_units,
                climate: checkbox(form.climate.as_deref()),
                camera: checkbox(form.camera.as_deref()),
            },
            serial_no,
        ))
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventForm {
    /// Id of one of the user's sensors
    pub sensor: Option<String>,
    /// `YYYY-MM-DD HH:MM[:SS]`, a `T` separator is accepted
    pub timestamp: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub camera: Option<String>,
    pub avg_temp: Option<String>,
    pub avg_pressure: Option<String>,
    pub pct_humidity: Option<String>,
    pub altitude: Option<String>,
    pub windspeed: Option<String>,
    pub csrfmiddlewaretoken: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct EventInput {
    pub sensor_id: i32,
    pub timestamp: NaiveDateTime,
    pub location: Location,
    pub status: Status,
    pub camera: CameraStatus,
    pub avg_temp: Decimal,
    pub avg_pressure: Decimal,
    #[validate(range(min = 0, max = 100))]
    pub pct_humidity: i32,
    #[validate(range(min = 0))]
    pub altitude: i32,
    #[validate(range(min = 0))]
    pub windspeed: i32,
}

impl EventForm {
    pub fn initial() -> Self {
        Self {
            location: code(Location::Cockpit),
            status: code(Status::Online),
            camera: code(CameraStatus::NotApplicable),
            avg_temp: Some("0.00".to_string()),
            avg_pressure: Some("0.00".to_string()),
            pct_humidity: Some("0".to_string()),
            altitude: Some("0".to_string()),
            windspeed: Some("0".to_string()),
            ..Default::default()
        }
    }

    pub fn from_model(event: &entity::complex_event::Model) -> Self {
        Self {
            sensor: Some(event.sensor_id.to_string()),
            timestamp: Some(event.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()),
            location: code(event.location),
            status: code(event.status),
            camera: code(event.camera),
            avg_temp: Some(event.avg_temp.to_string()),
            avg_pressure: Some(event.avg_pressure.to_string()),
            pct_humidity: Some(event.pct_humidity.to_string()),
            altitude: Some(event.altitude.to_string()),
            windspeed: Some(event.windspeed.to_string()),
            csrfmiddlewaretoken: None,
        }
    }

    pub fn clean(self) -> Result<EventInput, FormErrors> {
        let mut errors = FormErrors::new();

        let sensor = required(&mut errors, "sensor", normalize(self.sensor))
            .and_then(|v| parse_reference(&mut errors, "sensor", &v));
        let timestamp = required(&mut errors, "timestamp", normalize(self.timestamp))
            .and_then(|v| parse_datetime(&mut errors, "timestamp", &v));
        let location = choice_or(
            &mut errors,
            "location",
            normalize(self.location).as_deref(),
            Location::Cockpit,
        );
        let status = choice_or(
            &mut errors,
            "status",
            normalize(self.status).as_deref(),
            Status::Online,
        );
        let camera = choice_or(
            &mut errors,
            "camera",
            normalize(self.camera).as_deref(),
            CameraStatus::NotApplicable,
        );
        let avg_temp = reading(&mut errors, "avg_temp", normalize(self.avg_temp));
        let avg_pressure = reading(&mut errors, "avg_pressure", normalize(self.avg_pressure));
        let pct_humidity = integer_or(
            &mut errors,
            "pct_humidity",
            normalize(self.pct_humidity).as_deref(),
            0,
        );
        let altitude = integer_or(
            &mut errors,
            "altitude",
            normalize(self.altitude).as_deref(),
            0,
        );
        let windspeed = integer_or(
            &mut errors,
            "windspeed",
            normalize(self.windspeed).as_deref(),
            0,
        );

        let (
            Some(sensor_id),
            Some(timestamp),
            Some(location),
            Some(status),
            Some(camera),
            Some(avg_temp),
            Some(avg_pressure),
            Some(pct_humidity),
            Some(altitude),
            Some(windspeed),
        ) = (
            sensor,
            timestamp,
            location,
            status,
            camera,
            avg_temp,
            avg_pressure,
            pct_humidity,
            altitude,
            windspeed,
        )
        else {
            return Err(errors);
        };

        let input = EventInput {
            sensor_id,
            timestamp,
            location,
            status,
            camera,
            avg_temp,
            avg_pressure,
            pct_humidity,
            altitude,
            windspeed,
        };
        if let Err(e) = input.validate() {
            errors.extend_validation(e);
        }

        errors.into_result().map(|()| input)
    }
}

fn reading(errors: &mut FormErrors, field: &str, value: Option<String>) -> Option<Decimal> {
    match value {
        Some(value) => parse_decimal(errors, field, &value, READING_RULES),
        None => Some(Decimal::new(0, 2)),
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeviceForm {
    #[validate(length(max = 20))]
    pub name: Option<String>,
    #[validate(length(max = 20))]
    pub sku: Option<String>,
    pub night_vision: Option<String>,
    pub weather: Option<String>,
    pub csrfmiddlewaretoken: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInput {
    pub name: String,
    pub sku: String,
    pub night_vision: bool,
    pub weather: bool,
}

impl DeviceForm {
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn from_model(device: &entity::complex_device::Model) -> Self {
        Self {
            name: Some(device.name.clone()),
            sku: Some(device.sku.clone()),
            night_vision: checked(device.night_vision),
            weather: checked(device.weather),
            csrfmiddlewaretoken: None,
        }
    }

    pub fn clean(self) -> Result<DeviceInput, FormErrors> {
        let form = Self {
            name: normalize(self.name),
            sku: normalize(self.sku),
            night_vision: normalize(self.night_vision),
            weather: normalize(self.weather),
            csrfmiddlewaretoken: None,
        };

        let mut errors = FormErrors::new();
        if let Err(e) = form.validate() {
            errors.extend_validation(e);
        }

        let name = required(&mut errors, "name", form.name);
        let sku = required(&mut errors, "sku", form.sku);

        match (name, sku) {
            (Some(name), Some(sku)) if errors.is_empty() => Ok(DeviceInput {
                name,
                sku,
                night_vision: checkbox(form.night_vision.as_deref()),
                weather: checkbox(form.weather.as_deref()),
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeterForm {
    /// Id of one of the user's devices
    pub device: Option<String>,
    pub location: Option<String>,
    pub csrfmiddlewaretoken: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterInput {
    pub device_id: i32,
    pub location: Location,
}

impl MeterForm {
    pub fn initial() -> Self {
        Self {
            location: code(Location::Cockpit),
            ..Default::default()
        }
    }

    pub fn from_model(meter: &entity::complex_meter::Model) -> Self {
        Self {
            device: Some(meter.device_id.to_string()),
            location: code(meter.location),
            csrfmiddlewaretoken: None,
        }
    }

    pub fn clean(self) -> Result<MeterInput, FormErrors> {
        let mut errors = FormErrors::new();

        let device = required(&mut errors, "device", normalize(self.device))
            .and_then(|v| parse_reference(&mut errors, "device", &v));
        let location = choice_or(
            &mut errors,
            "location",
            normalize(self.location).as_deref(),
            Location::Cockpit,
        );

        match (device, location) {
            (Some(device_id), Some(location)) if errors.is_empty() => Ok(MeterInput {
                device_id,
                location,
            }),
            _ => Err(errors),
        }
    }
}
