//! Repositories for sensors, events, devices and meters.

pub mod device;
pub mod event;
pub mod meter;
pub mod sensor;
