//! Confirmation and error pages addressed by record id.
//!
//! These are reached through redirects and don't need a login.

use axum::{extract::Path, response::IntoResponse, Json};

use crate::{
    model::api::RecordPageDto,
    server::util::links::RecordPage,
};

pub static PAGE_TAG: &str = "page";

fn record_page(page: RecordPage, pk: i32) -> Json<RecordPageDto> {
    Json(RecordPageDto {
        title: page.title().to_string(),
        pk,
    })
}

macro_rules! record_page_handler {
    ($name:ident, $path:literal, $page:expr, $description:literal) => {
        #[utoipa::path(
            get,
            path = $path,
            tag = PAGE_TAG,
            params(("id" = i32, Path, description = "Record id")),
            responses((status = 200, description = $description, body = RecordPageDto)),
        )]
        pub async fn $name(Path(id): Path<i32>) -> impl IntoResponse {
            record_page($page, id)
        }
    };
}

record_page_handler!(simple_created, "/simple/created/{id}/", RecordPage::Created, "Record created");
record_page_handler!(simple_updated, "/simple/updated/{id}/", RecordPage::Updated, "Record updated");
record_page_handler!(simple_deleted, "/simple/deleted/{id}/", RecordPage::Deleted, "Record deleted");
record_page_handler!(simple_eperm, "/simple/eperm/{id}/", RecordPage::Eperm, "Record not visible");
record_page_handler!(
    simple_nonexistent,
    "/simple/nonexistent/{id}/",
    RecordPage::Nonexistent,
    "Record does not exist"
);
record_page_handler!(complex_created, "/complex/created/{id}/", RecordPage::Created, "Record created");
record_page_handler!(complex_updated, "/complex/updated/{id}/", RecordPage::Updated, "Record updated");
record_page_handler!(complex_deleted, "/complex/deleted/{id}/", RecordPage::Deleted, "Record deleted");
record_page_handler!(complex_eperm, "/complex/eperm/{id}/", RecordPage::Eperm, "Record not visible");
record_page_handler!(
    complex_nonexistent,
    "/complex/nonexistent/{id}/",
    RecordPage::Nonexistent,
    "Record does not exist"
);
