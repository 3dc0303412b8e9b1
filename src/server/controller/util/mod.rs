//! Helpers shared by the controllers: the logged in user extractor, CSRF validation and the
//! form and redirect responses every entity route produces.

pub mod csrf;
pub mod current_user;

use axum::{response::Redirect, Json};
use serde::Serialize;
use tower_sessions::Session;

use crate::{
    model::api::FormDto,
    server::{
        error::Error,
        model::{kind::EntityKind, session::csrf::SessionCsrfToken},
        util::links::RecordPage,
    },
};

/// Form document for a GET on a create, update or delete route.
pub async fn form_document<T: Serialize>(
    session: &Session,
    title: String,
    initial: T,
) -> Result<Json<FormDto<T>>, Error> {
    let csrf_token = SessionCsrfToken::get_or_create(session).await?;

    Ok(Json(FormDto {
        title,
        csrf_token,
        initial,
    }))
}

/// 303 to the page reporting on record `id` of `kind`.
pub fn redirect_to_record_page(page: RecordPage, kind: EntityKind, id: i32) -> Redirect {
    Redirect::to(&page.path(kind.app(), id))
}
