//! Coded choice columns shared by the complex app tables.
//!
//! Every choice is stored as a small integer; the numeric codes are stable and
//! are what forms submit.

use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum TempUnits {
    #[sea_orm(num_value = 0)]
    Fahrenheit,
    #[sea_orm(num_value = 1)]
    Celsius,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum PressureUnits {
    #[sea_orm(num_value = 2)]
    Psi,
    #[sea_orm(num_value = 3)]
    Atm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum AltUnits {
    #[sea_orm(num_value = 4)]
    Miles,
    #[sea_orm(num_value = 5)]
    Kilometers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum WsUnits {
    #[sea_orm(num_value = 6)]
    MilesPerHour,
    #[sea_orm(num_value = 7)]
    KilometersPerHour,
}

/// Mounting position on the airframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum Location {
    #[sea_orm(num_value = 0)]
    Nose,
    #[sea_orm(num_value = 1)]
    Cockpit,
    #[sea_orm(num_value = 2)]
    ForeExitDoor,
    #[sea_orm(num_value = 3)]
    PortWingTip,
    #[sea_orm(num_value = 4)]
    PortWing,
    #[sea_orm(num_value = 5)]
    StarboardWingTip,
    #[sea_orm(num_value = 6)]
    StarboardWing,
    #[sea_orm(num_value = 7)]
    AftExitDoor,
    #[sea_orm(num_value = 8)]
    Tail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum Status {
    #[sea_orm(num_value = 100)]
    Online,
    #[sea_orm(num_value = 101)]
    ClimateFault,
    #[sea_orm(num_value = 102)]
    CameraFault,
    #[sea_orm(num_value = 103)]
    LowPower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum CameraStatus {
    #[sea_orm(num_value = 200)]
    NotApplicable,
    #[sea_orm(num_value = 201)]
    LensObscured,
    #[sea_orm(num_value = 202)]
    ContrastTooHigh,
    #[sea_orm(num_value = 203)]
    MemoryFull,
}

/// Human readable label of a coded choice.
pub trait ChoiceLabel {
    fn label(&self) -> &'static str;
}

impl ChoiceLabel for TempUnits {
    fn label(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "Fahrenheit",
            Self::Celsius => "Celsius",
        }
    }
}

impl ChoiceLabel for PressureUnits {
    fn label(&self) -> &'static str {
        match self {
            Self::Psi => "psi",
            Self::Atm => "atm",
        }
    }
}

impl ChoiceLabel for AltUnits {
    fn label(&self) -> &'static str {
        match self {
            Self::Miles => "Miles",
            Self::Kilometers => "Kilometers",
        }
    }
}

impl ChoiceLabel for WsUnits {
    fn label(&self) -> &'static str {
        match self {
            Self::MilesPerHour => "Miles/Hour",
            Self::KilometersPerHour => "Kilometers/Hour",
        }
    }
}

impl ChoiceLabel for Location {
    fn label(&self) -> &'static str {
        match self {
            Self::Nose => "Nose",
            Self::Cockpit => "Cockpit",
            Self::ForeExitDoor => "Fore Exit Door",
            Self::PortWingTip => "Port Wing Tip",
            Self::PortWing => "Port Wing",
            Self::StarboardWingTip => "Starboard Wing Tip",
            Self::StarboardWing => "Starboard Wing",
            Self::AftExitDoor => "Aft Exit Door",
            Self::Tail => "Tail",
        }
    }
}

impl ChoiceLabel for Status {
    fn label(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::ClimateFault => "Climate Fault",
            Self::CameraFault => "Camera Fault",
            Self::LowPower => "Low Power",
        }
    }
}

impl ChoiceLabel for CameraStatus {
    fn label(&self) -> &'static str {
        match self {
            Self::NotApplicable => "N/A",
            Self::LensObscured => "Lens Obscured",
            Self::ContrastTooHigh => "Contrast Too High",
            Self::MemoryFull => "Memory Full",
        }
    }
}
