//! Tests for the complex app's sensor, event, device and meter endpoints.

mod device;
mod event;
mod meter;
mod sensor;

use super::*;
