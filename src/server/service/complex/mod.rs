//! Sensor, event, device and meter services.

pub mod device;
pub mod event;
pub mod meter;
pub mod sensor;

use entity::sea_orm_active_enums::ChoiceLabel;
use sea_orm::ActiveEnum;

use crate::model::complex::ChoiceDto;

/// Numeric code and label of a stored choice.
fn choice<E: ActiveEnum<Value = i16> + ChoiceLabel>(value: E) -> ChoiceDto {
    ChoiceDto {
        value: value.to_value(),
        label: value.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use entity::sea_orm_active_enums::{Location, TempUnits};

    use super::choice;

    #[test]
    /// Expect the stored code and its label
    fn carries_code_and_label() {
        let celsius = choice(TempUnits::Celsius);
        assert_eq!(celsius.value, 1);
        assert_eq!(celsius.label, "Celsius");

        assert_eq!(choice(Location::Cockpit).value, 1);
    }
}
