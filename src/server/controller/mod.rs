//! HTTP controller endpoints.
//!
//! Handlers authenticate through the [`util::current_user::CurrentUser`] extractor, check the
//! entity permission the route needs, validate the CSRF token on POST and hand cleaned forms
//! to the services. Reads answer with JSON documents; successful writes redirect to the
//! app's confirmation pages.

pub mod auth;
pub mod complex;
pub mod home;
pub mod page;
pub mod simple;
pub mod util;
