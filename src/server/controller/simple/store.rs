use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DetailDto, ErrorDto, FormDto, FormErrorDto, PageDto},
        simple::StoreDto,
    },
    server::{
        controller::util::{
            csrf::validate_csrf, current_user::CurrentUser, form_document,
            redirect_to_record_page,
        },
        error::Error,
        form::{simple::StoreForm, ConfirmForm},
        model::{
            app::AppState,
            kind::{Action, EntityKind},
        },
        service::simple::store::StoreService,
        util::{links::RecordPage, pagination::Pagination},
    },
};

pub static STORE_TAG: &str = "store";

const KIND: EntityKind = EntityKind::Store;

async fn store_page(
    state: &AppState,
    current: &CurrentUser,
    page: u64,
) -> Result<Json<PageDto<StoreDto>>, Error> {
    let pagination = Pagination::new(page, state.page_size(KIND));
    let page = StoreService::new(&state.db)
        .list(current.id(), pagination)
        .await?;

    Ok(Json(page))
}

/// First page of the user's active stores
///
/// # Responses
/// - 200 (Success): The page
/// - 303 (See Other): Not logged in
/// - 404 (Not Found): The user has no active stores
#[utoipa::path(
    get,
    path = "/simple/stores/",
    tag = STORE_TAG,
    responses(
        (status = 200, description = "First page of stores", body = PageDto<StoreDto>),
        (status = 303, description = "Login required"),
        (status = 404, description = "No active stores", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_stores(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    store_page(&state, &current, 0).await
}

#[utoipa::path(
    get,
    path = "/simple/stores/page/{page}/",
    tag = STORE_TAG,
    params(("page" = u64, Path, description = "Zero-based page number")),
    responses(
        (status = 200, description = "Page of stores", body = PageDto<StoreDto>),
        (status = 303, description = "Login required"),
        (status = 404, description = "No active stores", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stores_page(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(page): Path<u64>,
) -> Result<impl IntoResponse, Error> {
    store_page(&state, &current, page).await
}

/// One of the user's stores
///
/// # Responses
/// - 200 (Success): The store
/// - 303 (See Other): Not logged in, or the store is missing, deleted or someone else's
///   (redirect to the eperm page)
#[utoipa::path(
    get,
    path = "/simple/stores/{id}/",
    tag = STORE_TAG,
    params(("id" = i32, Path, description = "Store id")),
    responses(
        (status = 200, description = "Store detail", body = DetailDto<StoreDto>),
        (status = 303, description = "Login required, or not visible to this user"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_store(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<Response, Error> {
    let Some(store) = StoreService::new(&state.db).get(current.id(), id).await? else {
        return Ok(redirect_to_record_page(RecordPage::Eperm, KIND, id).into_response());
    };

    Ok(Json(DetailDto {
        title: KIND.detail_title(),
        item: store,
    })
    .into_response())
}

/// Create form with the default values
#[utoipa::path(
    get,
    path = "/simple/stores/create/",
    tag = STORE_TAG,
    responses(
        (status = 200, description = "Create form", body = FormDto<StoreForm>),
        (status = 303, description = "Login or add permission required"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_store_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Add).await?;

    form_document(&session, Action::Add.form_title(KIND), StoreForm::initial()).await
}

/// Creates a store
///
/// # Responses
/// - 303 (See Other): Created, redirect to the created page; or login/permission required
/// - 400 (Bad Request): Field errors
/// - 403 (Forbidden): CSRF token missing or incorrect
#[utoipa::path(
    post,
    path = "/simple/stores/create/",
    tag = STORE_TAG,
    request_body(content = StoreForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created, or login or add permission required"),
        (status = 400, description = "Field errors", body = FormErrorDto),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_store(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Form(form): Form<StoreForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Add).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let input = form.clean()?;
    let store = StoreService::new(&state.db)
        .create(current.id(), input)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Created, KIND, store.id))
}

/// Update form prefilled with the current store
#[utoipa::path(
    get,
    path = "/simple/stores/update/{id}/",
    tag = STORE_TAG,
    params(("id" = i32, Path, description = "Store id")),
    responses(
        (status = 200, description = "Update form", body = FormDto<StoreForm>),
        (status = 303, description = "Login or change permission required"),
        (status = 404, description = "Store not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_store_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Change).await?;

    let store = StoreService::new(&state.db)
        .get_model(current.id(), id)
        .await?;

    form_document(
        &session,
        Action::Change.form_title(KIND),
        StoreForm::from_model(&store),
    )
    .await
}

#[utoipa::path(
    post,
    path = "/simple/stores/update/{id}/",
    tag = STORE_TAG,
    params(("id" = i32, Path, description = "Store id")),
    request_body(content = StoreForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated, or login or change permission required"),
        (status = 400, description = "Field errors", body = FormErrorDto),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 404, description = "Store not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_store(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
    Form(form): Form<StoreForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Change).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let input = form.clean()?;
    let store = StoreService::new(&state.db)
        .update(current.id(), id, input)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Updated, KIND, store.id))
}

#[utoipa::path(
    get,
    path = "/simple/stores/delete/{id}/",
    tag = STORE_TAG,
    params(("id" = i32, Path, description = "Store id")),
    responses(
        (status = 200, description = "Delete confirmation form", body = FormDto<StoreForm>),
        (status = 303, description = "Login or delete permission required"),
        (status = 404, description = "Store not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_store_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Delete).await?;

    let store = StoreService::new(&state.db)
        .get_model(current.id(), id)
        .await?;

    form_document(
        &session,
        Action::Delete.form_title(KIND),
        StoreForm::from_model(&store),
    )
    .await
}

/// Soft deletes a store
///
/// The row is kept with `deleted` set and drops out of every read.
#[utoipa::path(
    post,
    path = "/simple/stores/delete/{id}/",
    tag = STORE_TAG,
    params(("id" = i32, Path, description = "Store id")),
    request_body(content = ConfirmForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Deleted, or login or delete permission required"),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 404, description = "Store not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_store(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
    Form(form): Form<ConfirmForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Delete).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let store = StoreService::new(&state.db)
        .delete(current.id(), id)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Deleted, KIND, store.id))
}
