use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Field errors for a rejected form submission
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FormErrorDto {
    /// Messages keyed by form field name
    pub errors: BTreeMap<String, Vec<String>>,
}

/// One page of a user's active records
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    pub title: String,
    /// Zero-based page number
    pub page: u64,
    pub items: Vec<T>,
    /// Link to the previous page, present when `page > 0`
    pub prev: Option<String>,
    /// Link to the next page, present when this page is full
    pub next: Option<String>,
    /// Link to the aggregate for this page, for entities that have one
    pub aggr: Option<String>,
}

/// A single record with its page title
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DetailDto<T> {
    pub title: String,
    pub item: T,
}

/// Form document returned by the GET side of create, update and delete routes
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FormDto<T> {
    pub title: String,
    /// Token to echo back as `csrfmiddlewaretoken`
    pub csrf_token: String,
    pub initial: T,
}

/// Static page addressed by a record id (created, updated, deleted, eperm, nonexistent)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecordPageDto {
    pub title: String,
    pub pk: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LinkDto {
    pub title: String,
    pub href: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HomeDto {
    pub title: String,
    pub username: String,
    pub links: Vec<LinkDto>,
}
