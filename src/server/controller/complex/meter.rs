use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DetailDto, ErrorDto, FormDto, FormErrorDto, PageDto},
        complex::MeterDto,
    },
    server::{
        controller::util::{
            csrf::validate_csrf, current_user::CurrentUser, form_document,
            redirect_to_record_page,
        },
        error::Error,
        form::{complex::MeterForm, ConfirmForm},
        model::{
            app::AppState,
            kind::{Action, EntityKind},
        },
        service::complex::meter::MeterService,
        util::{links::RecordPage, pagination::Pagination},
    },
};

pub static METER_TAG: &str = "meter";

const KIND: EntityKind = EntityKind::Meter;

async fn meter_page(
    state: &AppState,
    current: &CurrentUser,
    page: u64,
) -> Result<Json<PageDto<MeterDto>>, Error> {
    let pagination = Pagination::new(page, state.page_size(KIND));
    let page = MeterService::new(&state.db)
        .list(current.id(), pagination)
        .await?;

    Ok(Json(page))
}

/// First page of the user's active meters
///
/// # Responses
/// - 200 (Success): The page
/// - 303 (See Other): Not logged in
/// - 404 (Not Found): The user has no active meters
#[utoipa::path(
    get,
    path = "/complex/meters/",
    tag = METER_TAG,
    responses(
        (status = 200, description = "First page of meters", body = PageDto<MeterDto>),
        (status = 303, description = "Login required"),
        (status = 404, description = "No active meters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_meters(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    meter_page(&state, &current, 0).await
}

#[utoipa::path(
    get,
    path = "/complex/meters/page/{page}/",
    tag = METER_TAG,
    params(("page" = u64, Path, description = "Zero-based page number")),
    responses(
        (status = 200, description = "Page of meters", body = PageDto<MeterDto>),
        (status = 303, description = "Login required"),
        (status = 404, description = "No active meters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_meters_page(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(page): Path<u64>,
) -> Result<impl IntoResponse, Error> {
    meter_page(&state, &current, page).await
}

#[utoipa::path(
    get,
    path = "/complex/meters/{id}/",
    tag = METER_TAG,
    params(("id" = i32, Path, description = "Meter id")),
    responses(
        (status = 200, description = "Meter detail", body = DetailDto<MeterDto>),
        (status = 303, description = "Login required, or not visible to this user"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_meter(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<Response, Error> {
    let Some(meter) = MeterService::new(&state.db).get(current.id(), id).await? else {
        return Ok(redirect_to_record_page(RecordPage::Eperm, KIND, id).into_response());
    };

    Ok(Json(DetailDto {
        title: KIND.detail_title(),
        item: meter,
    })
    .into_response())
}

/// Create form with the default values
#[utoipa::path(
    get,
    path = "/complex/meters/create/",
    tag = METER_TAG,
    responses(
        (status = 200, description = "Create form", body = FormDto<MeterForm>),
        (status = 303, description = "Login or add permission required"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_meter_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Add).await?;

    form_document(&session, Action::Add.form_title(KIND), MeterForm::initial()).await
}

/// Creates a meter
///
/// # Responses
/// - 303 (See Other): Created, redirect to the created page; or login/permission required
/// - 400 (Bad Request): Field errors, including a device that isn't one of the user's own
/// - 403 (Forbidden): CSRF token missing or incorrect
#[utoipa::path(
    post,
    path = "/complex/meters/create/",
    tag = METER_TAG,
    request_body(content = MeterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created, or login or add permission required"),
        (status = 400, description = "Field errors", body = FormErrorDto),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_meter(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Form(form): Form<MeterForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Add).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let input = form.clean()?;
    let meter = MeterService::new(&state.db)
        .create(current.id(), input)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Created, KIND, meter.id))
}

/// Update form prefilled with the current meter
#[utoipa::path(
    get,
    path = "/complex/meters/update/{id}/",
    tag = METER_TAG,
    params(("id" = i32, Path, description = "Meter id")),
    responses(
        (status = 200, description = "Update form", body = FormDto<MeterForm>),
        (status = 303, description = "Login or change permission required"),
        (status = 404, description = "Meter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_meter_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Change).await?;

    let meter = MeterService::new(&state.db)
        .get_model(current.id(), id)
        .await?;

    form_document(
        &session,
        Action::Change.form_title(KIND),
        MeterForm::from_model(&meter),
    )
    .await
}

#[utoipa::path(
    post,
    path = "/complex/meters/update/{id}/",
    tag = METER_TAG,
    params(("id" = i32, Path, description = "Meter id")),
    request_body(content = MeterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated, or login or change permission required"),
        (status = 400, description = "Field errors", body = FormErrorDto),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 404, description = "Meter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_meter(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
    Form(form): Form<MeterForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Change).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let input = form.clean()?;
    let meter = MeterService::new(&state.db)
        .update(current.id(), id, input)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Updated, KIND, meter.id))
}

#[utoipa::path(
    get,
    path = "/complex/meters/delete/{id}/",
    tag = METER_TAG,
    params(("id" = i32, Path, description = "Meter id")),
    responses(
        (status = 200, description = "Delete confirmation form", body = FormDto<MeterForm>),
        (status = 303, description = "Login or delete permission required"),
        (status = 404, description = "Meter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_meter_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Delete).await?;

    let meter = MeterService::new(&state.db)
        .get_model(current.id(), id)
        .await?;

    form_document(
        &session,
        Action::Delete.form_title(KIND),
        MeterForm::from_model(&meter),
    )
    .await
}

/// Soft deletes a meter
///
/// The row is kept with `deleted` set and drops out of every read.
#[utoipa::path(
    post,
    path = "/complex/meters/delete/{id}/",
    tag = METER_TAG,
    params(("id" = i32, Path, description = "Meter id")),
    request_body(content = ConfirmForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Deleted, or login or delete permission required"),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 404, description = "Meter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_meter(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
    Form(form): Form<ConfirmForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Delete).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let meter = MeterService::new(&state.db)
        .delete(current.id(), id)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Deleted, KIND, meter.id))
}
