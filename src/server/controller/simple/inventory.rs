use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DetailDto, ErrorDto, FormDto, FormErrorDto, PageDto},
        simple::{InventoryAggrDto, InventoryDto},
    },
    server::{
        controller::util::{
            csrf::validate_csrf, current_user::CurrentUser, form_document,
            redirect_to_record_page,
        },
        error::Error,
        form::{simple::InventoryForm, ConfirmForm},
        model::{
            app::AppState,
            kind::{Action, EntityKind},
        },
        service::simple::inventory::InventoryService,
        util::{links::RecordPage, pagination::Pagination},
    },
};

pub static INVENTORY_TAG: &str = "inventory";

const KIND: EntityKind = EntityKind::Inventory;

async fn inventory_page(
    state: &AppState,
    current: &CurrentUser,
    page: u64,
) -> Result<Json<PageDto<InventoryDto>>, Error> {
    let pagination = Pagination::new(page, state.page_size(KIND));
    let page = InventoryService::new(&state.db)
        .list(current.id(), pagination)
        .await?;

    Ok(Json(page))
}

/// First page of the user's active inventories
///
/// # Responses
/// - 200 (Success): The page
/// - 303 (See Other): Not logged in
/// - 404 (Not Found): The user has no active inventories
#[utoipa::path(
    get,
    path = "/simple/inventories/",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "First page of inventories", body = PageDto<InventoryDto>),
        (status = 303, description = "Login required"),
        (status = 404, description = "No active inventories", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_inventories(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    inventory_page(&state, &current, 0).await
}

#[utoipa::path(
    get,
    path = "/simple/inventories/page/{page}/",
    tag = INVENTORY_TAG,
    params(("page" = u64, Path, description = "Zero-based page number")),
    responses(
        (status = 200, description = "Page of inventories", body = PageDto<InventoryDto>),
        (status = 303, description = "Login required"),
        (status = 404, description = "No active inventories", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventories_page(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(page): Path<u64>,
) -> Result<impl IntoResponse, Error> {
    inventory_page(&state, &current, page).await
}

/// One of the user's inventories
///
/// # Responses
/// - 200 (Success): The inventory
/// - 303 (See Other): Not logged in, or the inventory is missing, deleted or someone else's
///   (redirect to the eperm page)
#[utoipa::path(
    get,
    path = "/simple/inventories/{id}/",
    tag = INVENTORY_TAG,
    params(("id" = i32, Path, description = "Inventory id")),
    responses(
        (status = 200, description = "Inventory detail", body = DetailDto<InventoryDto>),
        (status = 303, description = "Login required, or not visible to this user"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<Response, Error> {
    let Some(inventory) = InventoryService::new(&state.db).get(current.id(), id).await? else {
        return Ok(redirect_to_record_page(RecordPage::Eperm, KIND, id).into_response());
    };

    Ok(Json(DetailDto {
        title: KIND.detail_title(),
        item: inventory,
    })
    .into_response())
}

/// Sum of inventory quantity over one page of the user's active inventories
///
/// An empty page sums to zero.
#[utoipa::path(
    get,
    path = "/simple/inventories/aggr/{page}/",
    tag = INVENTORY_TAG,
    params(("page" = u64, Path, description = "Zero-based page number")),
    responses(
        (status = 200, description = "Page aggregate", body = InventoryAggrDto),
        (status = 303, description = "Login required"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory_aggregate(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(page): Path<u64>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::new(page, state.page_size(KIND));
    let aggregate = InventoryService::new(&state.db)
        .aggregate(current.id(), pagination)
        .await?;

    Ok(Json(aggregate))
}

/// Create form with the default values
#[utoipa::path(
    get,
    path = "/simple/inventories/create/",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "Create form", body = FormDto<InventoryForm>),
        (status = 303, description = "Login or add permission required"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_inventory_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Add).await?;

    form_document(&session, Action::Add.form_title(KIND), InventoryForm::initial()).await
}

/// Creates an inventory
///
/// # Responses
/// - 303 (See Other): Created, redirect to the created page; or login/permission required
/// - 400 (Bad Request): Field errors, including a store and widget that isn't one of the user's own
/// - 403 (Forbidden): CSRF token missing or incorrect
#[utoipa::path(
    post,
    path = "/simple/inventories/create/",
    tag = INVENTORY_TAG,
    request_body(content = InventoryForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created, or login or add permission required"),
        (status = 400, description = "Field errors", body = FormErrorDto),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_inventory(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Form(form): Form<InventoryForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Add).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let input = form.clean()?;
    let inventory = InventoryService::new(&state.db)
        .create(current.id(), input)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Created, KIND, inventory.id))
}

/// Update form prefilled with the current inventory
#[utoipa::path(
    get,
    path = "/simple/inventories/update/{id}/",
    tag = INVENTORY_TAG,
    params(("id" = i32, Path, description = "Inventory id")),
    responses(
        (status = 200, description = "Update form", body = FormDto<InventoryForm>),
        (status = 303, description = "Login or change permission required"),
        (status = 404, description = "Inventory not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_inventory_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Change).await?;

    let inventory = InventoryService::new(&state.db)
        .get_model(current.id(), id)
        .await?;

    form_document(
        &session,
        Action::Change.form_title(KIND),
        InventoryForm::from_model(&inventory),
    )
    .await
}

#[utoipa::path(
    post,
    path = "/simple/inventories/update/{id}/",
    tag = INVENTORY_TAG,
    params(("id" = i32, Path, description = "Inventory id")),
    request_body(content = InventoryForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated, or login or change permission required"),
        (status = 400, description = "Field errors", body = FormErrorDto),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 404, description = "Inventory not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_inventory(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
    Form(form): Form<InventoryForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Change).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let input = form.clean()?;
    let inventory = InventoryService::new(&state.db)
        .update(current.id(), id, input)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Updated, KIND, inventory.id))
}

#[utoipa::path(
    get,
    path = "/simple/inventories/delete/{id}/",
    tag = INVENTORY_TAG,
    params(("id" = i32, Path, description = "Inventory id")),
    responses(
        (status = 200, description = "Delete confirmation form", body = FormDto<InventoryForm>),
        (status = 303, description = "Login or delete permission required"),
        (status = 404, description = "Inventory not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_inventory_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Delete).await?;

    let inventory = InventoryService::new(&state.db)
        .get_model(current.id(), id)
        .await?;

    form_document(
        &session,
        Action::Delete.form_title(KIND),
        InventoryForm::from_model(&inventory),
    )
    .await
}

/// Soft deletes an inventory
///
/// The row is kept with `deleted` set and drops out of every read.
#[utoipa::path(
    post,
    path = "/simple/inventories/delete/{id}/",
    tag = INVENTORY_TAG,
    params(("id" = i32, Path, description = "Inventory id")),
    request_body(content = ConfirmForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Deleted, or login or delete permission required"),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 404, description = "Inventory not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_inventory(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
    Form(form): Form<ConfirmForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Delete).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let inventory = InventoryService::new(&state.db)
        .delete(current.id(), id)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Deleted, KIND, inventory.id))
}
