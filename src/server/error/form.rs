//! Field level form errors.
//!
//! Messages use the familiar HTML form wording, e.g.
//! `This field is required.` and `Ensure this value has at most 20 characters (it has 21).`

use std::{collections::BTreeMap, fmt};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use validator::{ValidationError, ValidationErrors};

use crate::model::api::FormErrorDto;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_NUMBER: &str = "Enter a number.";
pub const INVALID_INTEGER: &str = "Enter a whole number.";
pub const INVALID_DATETIME: &str = "Enter a valid date/time.";
pub const INVALID_SKU: &str = "Enter a valid SKU in the form 123-456-78.";
pub const INVALID_SERIAL_NO: &str = "Enter a valid serial number of letters and digits.";

/// Errors keyed by form field, in field name order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Merge in errors reported by `validator`.
    pub fn extend_validation(&mut self, errors: ValidationErrors) {
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                self.add(&field.to_string(), validation_message(error));
            }
        }
    }

    /// `Ok(())` when no errors were collected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Map a unique constraint violation onto the unique fields it names.
    ///
    /// Postgres reports the constraint name (`simple_store_name_key`) and SQLite the column
    /// (`simple_store.name`). When the column can't be identified every unique field gets
    /// the message. Returns `None` for any other database error.
    pub fn from_unique_violation(err: &DbErr, unique_fields: &[&str]) -> Option<Self> {
        let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() else {
            return None;
        };

        let named: Vec<&str> = unique_fields
            .iter()
            .copied()
            .filter(|field| {
                detail.contains(&format!(".{}", field)) || detail.contains(&format!("_{}_key", field))
            })
            .collect();

        let fields = if named.is_empty() {
            unique_fields.to_vec()
        } else {
            named
        };

        let mut errors = Self::new();
        for field in fields {
            errors.add(field, duplicate_message(field));
        }

        Some(errors)
    }
}

/// `<Field> already selected, please choose another.`
pub fn duplicate_message(field: &str) -> String {
    let label = field.replace('_', " ");
    let mut chars = label.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };

    format!("{} already selected, please choose another.", capitalized)
}

fn validation_message(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    match error.code.as_ref() {
        "length" => {
            let max = error.params.get("max").and_then(|v| v.as_u64());
            let len = error
                .params
                .get("value")
                .and_then(|v| v.as_str())
                .map(|s| s.chars().count());

            match (max, len) {
                (Some(max), Some(len)) => format!(
                    "Ensure this value has at most {} characters (it has {}).",
                    max, len
                ),
                _ => "Ensure this value has the correct length.".to_string(),
            }
        }
        "range" => {
            let value = error.params.get("value").and_then(|v| v.as_f64());
            let max = error.params.get("max").and_then(|v| v.as_f64());
            let min = error.params.get("min").and_then(|v| v.as_f64());

            match (value, min, max) {
                (Some(value), _, Some(max)) if value > max => {
                    format!("Ensure this value is less than or equal to {}.", max)
                }
                (_, Some(min), _) => {
                    format!("Ensure this value is greater than or equal to {}.", min)
                }
                _ => "Ensure this value is within range.".to_string(),
            }
        }
        code => format!("Enter a valid value ({}).", code),
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Form has errors in fields: ")?;
        let fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        write!(f, "{}", fields.join(", "))
    }
}

impl std::error::Error for FormErrors {}

impl IntoResponse for FormErrors {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(FormErrorDto {
                errors: self.errors,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct NameInput {
        #[validate(length(max = 20))]
        name: String,
    }

    #[test]
    /// Expect the length message to report both the limit and the actual length
    fn length_message_reports_actual_length() {
        let input = NameInput {
            name: "a".repeat(21),
        };
        let mut errors = FormErrors::new();

        errors.extend_validation(input.validate().unwrap_err());

        assert_eq!(
            errors.get("name").unwrap(),
            &vec!["Ensure this value has at most 20 characters (it has 21).".to_string()]
        );
    }

    #[test]
    /// Expect field names to be capitalized in duplicate messages
    fn duplicate_message_capitalizes_field() {
        assert_eq!(
            duplicate_message("sku"),
            "Sku already selected, please choose another."
        );
    }

    #[test]
    /// Expect into_result to succeed only without errors
    fn into_result_reflects_errors() {
        assert!(FormErrors::new().into_result().is_ok());

        let mut errors = FormErrors::new();
        errors.add("name", REQUIRED);
        assert!(errors.into_result().is_err());
    }

    #[test]
    /// Expect non unique-constraint errors to be ignored
    fn ignores_other_database_errors() {
        let err = DbErr::Custom("boom".to_string());

        assert!(FormErrors::from_unique_violation(&err, &["name"]).is_none());
    }
}
