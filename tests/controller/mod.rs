//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with the extractors they declare, the way the router would.

mod auth;
mod complex;
mod simple;

use popular_test_utils::prelude::*;

use crate::util::{json_body, location, TestContextExt};
