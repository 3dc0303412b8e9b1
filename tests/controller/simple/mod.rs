//! Tests for the simple app's store, widget and inventory endpoints.

mod inventory;
mod store;
mod widget;

use super::*;
