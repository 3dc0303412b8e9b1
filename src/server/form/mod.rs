//! Submitted form bodies and their cleaning into typed input.
//!
//! Each form is deserialized from `application/x-www-form-urlencoded` with every field as an
//! optional raw string. `clean` trims the values, runs the `validator` rules declared on the
//! form and parses the result into the input type the services accept. All problems are
//! collected into one [`FormErrors`] so the client sees every bad field at once.

pub mod auth;
pub mod complex;
pub mod simple;

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::error::form::{
    FormErrors, INVALID_DATETIME, INVALID_INTEGER, INVALID_NUMBER, REQUIRED,
};

/// `DDD-DDD-DD`
pub static SKU_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{2}$").unwrap());

pub static SERIAL_NO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Body of a delete confirmation; only the CSRF token is read.
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConfirmForm {
    pub csrfmiddlewaretoken: Option<String>,
}

/// Trimmed value, with blank treated as absent.
pub fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn required(errors: &mut FormErrors, field: &str, value: Option<String>) -> Option<String> {
    if value.is_none() {
        errors.add(field, REQUIRED);
    }

    value
}

/// Checkbox semantics: an unchecked box is simply not submitted.
pub fn checkbox(value: Option<&str>) -> bool {
    matches!(
        value.map(str::to_ascii_lowercase).as_deref(),
        Some("on") | Some("true") | Some("1")
    )
}

pub fn parse_integer(errors: &mut FormErrors, field: &str, value: &str) -> Option<i32> {
    match value.parse::<i32>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.add(field, INVALID_INTEGER);
            None
        }
    }
}

/// Parse an integer field that falls back to `default` when left blank.
pub fn integer_or(
    errors: &mut FormErrors,
    field: &str,
    value: Option<&str>,
    default: i32,
) -> Option<i32> {
    match value {
        Some(value) => parse_integer(errors, field, value),
        None => Some(default),
    }
}

/// Rules for a fixed-point decimal column.
#[derive(Debug, Clone, Copy)]
pub struct DecimalRules {
    pub max_digits: u32,
    pub decimal_places: u32,
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
}

pub fn parse_decimal(
    errors: &mut FormErrors,
    field: &str,
    value: &str,
    rules: DecimalRules,
) -> Option<Decimal> {
    let Ok(parsed) = value.parse::<Decimal>() else {
        errors.add(field, INVALID_NUMBER);
        return None;
    };
    let parsed = parsed.normalize();

    let mut valid = true;

    if let Some(max) = rules.max {
        if parsed > max {
            errors.add(
                field,
                format!("Ensure this value is less than or equal to {}.", max),
            );
            valid = false;
        }
    }
    if let Some(min) = rules.min {
        if parsed < min {
            errors.add(
                field,
                format!("Ensure this value is greater than or equal to {}.", min),
            );
            valid = false;
        }
    }

    let places = parsed.scale();
    let whole_digits = parsed.trunc().abs().to_string().trim_start_matches('0').len() as u32;

    if places > rules.decimal_places {
        errors.add(
            field,
            format!(
                "Ensure that there are no more than {} decimal places.",
                rules.decimal_places
            ),
        );
        valid = false;
    } else if whole_digits + rules.decimal_places > rules.max_digits {
        errors.add(
            field,
            format!(
                "Ensure that there are no more than {} digits before the decimal point.",
                rules.max_digits - rules.decimal_places
            ),
        );
        valid = false;
    }

    if !valid {
        return None;
    }

    let mut stored = parsed;
    stored.rescale(rules.decimal_places);

    Some(stored)
}

/// Parse a coded choice, e.g. `3` for `PressureUnits::Atm`.
pub fn parse_choice<E>(errors: &mut FormErrors, field: &str, value: &str) -> Option<E>
where
    E: ActiveEnum<Value = i16>,
{
    let choice = value
        .parse::<i16>()
        .ok()
        .and_then(|code| E::try_from_value(&code).ok());

    if choice.is_none() {
        errors.add(field, invalid_choice(value));
    }

    choice
}

pub fn choice_or<E>(errors: &mut FormErrors, field: &str, value: Option<&str>, default: E) -> Option<E>
where
    E: ActiveEnum<Value = i16>,
{
    match value {
        Some(value) => parse_choice(errors, field, value),
        None => Some(default),
    }
}

/// Id of a referenced record; whether the user may reference it is checked by the service.
pub fn parse_reference(errors: &mut FormErrors, field: &str, value: &str) -> Option<i32> {
    let id = value.parse::<i32>().ok();

    if id.is_none() {
        errors.add(field, INVALID_REFERENCE);
    }

    id
}

pub const INVALID_REFERENCE: &str =
    "Select a valid choice. That choice is not one of the available choices.";

pub fn invalid_choice(value: &str) -> String {
    format!(
        "Select a valid choice. {} is not one of the available choices.",
        value
    )
}

pub fn parse_datetime(errors: &mut FormErrors, field: &str, value: &str) -> Option<NaiveDateTime> {
    let parsed = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok());

    if parsed.is_none() {
        errors.add(field, INVALID_DATETIME);
    }

    parsed
}
