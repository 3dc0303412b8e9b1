use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DetailDto, ErrorDto, FormDto, FormErrorDto, PageDto},
        complex::DeviceDto,
    },
    server::{
        controller::util::{
            csrf::validate_csrf, current_user::CurrentUser, form_document,
            redirect_to_record_page,
        },
        error::Error,
        form::{complex::DeviceForm, ConfirmForm},
        model::{
            app::AppState,
            kind::{Action, EntityKind},
        },
        service::complex::device::DeviceService,
        util::{links::RecordPage, pagination::Pagination},
    },
};

pub static DEVICE_TAG: &str = "device";

const KIND: EntityKind = EntityKind::Device;

async fn device_page(
    state: &AppState,
    current: &CurrentUser,
    page: u64,
) -> Result<Json<PageDto<DeviceDto>>, Error> {
    let pagination = Pagination::new(page, state.page_size(KIND));
    let page = DeviceService::new(&state.db)
        .list(current.id(), pagination)
        .await?;

    Ok(Json(page))
}

/// First page of the user's active devices
///
/// # Responses
/// - 200 (Success): The page
/// - 303 (See Other): Not logged in
/// - 404 (Not Found): The user has no active devices
#[utoipa::path(
    get,
    path = "/complex/devices/",
    tag = DEVICE_TAG,
    responses(
        (status = 200, description = "First page of devices", body = PageDto<DeviceDto>),
        (status = 303, description = "Login required"),
        (status = 404, description = "No active devices", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_devices(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    device_page(&state, &current, 0).await
}

#[utoipa::path(
    get,
    path = "/complex/devices/page/{page}/",
    tag = DEVICE_TAG,
    params(("page" = u64, Path, description = "Zero-based page number")),
    responses(
        (status = 200, description = "Page of devices", body = PageDto<DeviceDto>),
        (status = 303, description = "Login required"),
        (status = 404, description = "No active devices", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_devices_page(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(page): Path<u64>,
) -> Result<impl IntoResponse, Error> {
    device_page(&state, &current, page).await
}

/// One of the user's devices
///
/// # Responses
/// - 200 (Success): The device
/// - 303 (See Other): Not logged in, or the device is missing, deleted or someone else's
///   (redirect to the eperm page)
#[utoipa::path(
    get,
    path = "/complex/devices/{id}/",
    tag = DEVICE_TAG,
    params(("id" = i32, Path, description = "Device id")),
    responses(
        (status = 200, description = "Device detail", body = DetailDto<DeviceDto>),
        (status = 303, description = "Login required, or not visible to this user"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_device(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<Response, Error> {
    let Some(device) = DeviceService::new(&state.db).get(current.id(), id).await? else {
        return Ok(redirect_to_record_page(RecordPage::Eperm, KIND, id).into_response());
    };

    Ok(Json(DetailDto {
        title: KIND.detail_title(),
        item: device,
    })
    .into_response())
}

/// Create form with the default values
#[utoipa::path(
    get,
    path = "/complex/devices/create/",
    tag = DEVICE_TAG,
    responses(
        (status = 200, description = "Create form", body = FormDto<DeviceForm>),
        (status = 303, description = "Login or add permission required"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_device_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Add).await?;

    form_document(&session, Action::Add.form_title(KIND), DeviceForm::initial()).await
}

/// Creates a device
///
/// # Responses
/// - 303 (See Other): Created, redirect to the created page; or login/permission required
/// - 400 (Bad Request): Field errors
/// - 403 (Forbidden): CSRF token missing or incorrect
#[utoipa::path(
    post,
    path = "/complex/devices/create/",
    tag = DEVICE_TAG,
    request_body(content = DeviceForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created, or login or add permission required"),
        (status = 400, description = "Field errors", body = FormErrorDto),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_device(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Form(form): Form<DeviceForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Add).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let input = form.clean()?;
    let device = DeviceService::new(&state.db)
        .create(current.id(), input)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Created, KIND, device.id))
}

/// Update form prefilled with the current device
#[utoipa::path(
    get,
    path = "/complex/devices/update/{id}/",
    tag = DEVICE_TAG,
    params(("id" = i32, Path, description = "Device id")),
    responses(
        (status = 200, description = "Update form", body = FormDto<DeviceForm>),
        (status = 303, description = "Login or change permission required"),
        (status = 404, description = "Device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_device_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Change).await?;

    let device = DeviceService::new(&state.db)
        .get_model(current.id(), id)
        .await?;

    form_document(
        &session,
        Action::Change.form_title(KIND),
        DeviceForm::from_model(&device),
    )
    .await
}

#[utoipa::path(
    post,
    path = "/complex/devices/update/{id}/",
    tag = DEVICE_TAG,
    params(("id" = i32, Path, description = "Device id")),
    request_body(content = DeviceForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated, or login or change permission required"),
        (status = 400, description = "Field errors", body = FormErrorDto),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 404, description = "Device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_device(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
    Form(form): Form<DeviceForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Change).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let input = form.clean()?;
    let device = DeviceService::new(&state.db)
        .update(current.id(), id, input)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Updated, KIND, device.id))
}

#[utoipa::path(
    get,
    path = "/complex/devices/delete/{id}/",
    tag = DEVICE_TAG,
    params(("id" = i32, Path, description = "Device id")),
    responses(
        (status = 200, description = "Delete confirmation form", body = FormDto<DeviceForm>),
        (status = 303, description = "Login or delete permission required"),
        (status = 404, description = "Device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_device_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Delete).await?;

    let device = DeviceService::new(&state.db)
        .get_model(current.id(), id)
        .await?;

    form_document(
        &session,
        Action::Delete.form_title(KIND),
        DeviceForm::from_model(&device),
    )
    .await
}

#[utoipa::path(
    post,
    path = "/complex/devices/delete/{id}/",
    tag = DEVICE_TAG,
    params(("id" = i32, Path, description = "Device id")),
    request_body(content = ConfirmForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Deleted, or login or delete permission required"),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 404, description = "Device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_device(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
    Form(form): Form<ConfirmForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Delete).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let device = DeviceService::new(&state.db)
        .delete(current.id(), id)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Deleted, KIND, device.id))
}
