//! Service layer for business logic.
//!
//! Services own the transaction boundaries, map repository results onto response bodies and
//! turn constraint violations and ownership checks into form errors or `NotFound`.

pub mod auth;
pub mod complex;
pub mod permission;
pub mod simple;
pub mod user;

use sea_orm::DbErr;

use crate::{
    model::api::PageDto,
    server::{
        error::{form::FormErrors, Error},
        model::kind::EntityKind,
        util::{links::RecordPage, pagination::Pagination},
    },
};

/// Maps a failed write onto field errors when it violated one of `unique_fields`.
fn write_error(err: DbErr, unique_fields: &[&str]) -> Error {
    match FormErrors::from_unique_violation(&err, unique_fields) {
        Some(errors) => Error::FormError(errors),
        None => Error::DbErr(err),
    }
}

/// Names the record and the `nonexistent` page reporting it.
fn not_found(kind: EntityKind, id: i32) -> Error {
    Error::NotFound(format!(
        "{} {} not found: {}",
        kind.title(),
        id,
        RecordPage::Nonexistent.path(kind.app(), id)
    ))
}

/// Error for a list request from a user with no active records of `kind`.
fn nothing_to_list(kind: EntityKind) -> Error {
    Error::NotFound(format!("No {} found", kind.plural()))
}

fn page_dto<T>(kind: EntityKind, pagination: Pagination, items: Vec<T>) -> PageDto<T> {
    let links = pagination.links(kind, items.len());

    PageDto {
        title: kind.list_title(),
        page: pagination.page,
        items,
        prev: links.prev,
        next: links.next,
        aggr: links.aggr,
    }
}
