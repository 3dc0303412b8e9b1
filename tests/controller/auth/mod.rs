//! Tests for login, logout and the current user endpoint.

mod login;
mod logout;
mod user;

use super::*;
