pub mod device;
pub mod event;
pub mod meter;
pub mod sensor;
