use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DetailDto, ErrorDto, FormDto, FormErrorDto, PageDto},
        complex::SensorDto,
    },
    server::{
        controller::util::{
            csrf::validate_csrf, current_user::CurrentUser, form_document,
            redirect_to_record_page,
        },
        error::Error,
        form::{complex::SensorForm, ConfirmForm},
        model::{
            app::AppState,
            kind::{Action, EntityKind},
        },
        service::complex::sensor::SensorService,
        util::{links::RecordPage, pagination::Pagination},
    },
};

pub static SENSOR_TAG: &str = "sensor";

const KIND: EntityKind = EntityKind::Sensor;

async fn sensor_page(
    state: &AppState,
    current: &CurrentUser,
    page: u64,
) -> Result<Json<PageDto<SensorDto>>, Error> {
    let pagination = Pagination::new(page, state.page_size(KIND));
    let page = SensorService::new(&state.db)
        .list(current.id(), pagination)
        .await?;

    Ok(Json(page))
}

/// First page of the user's active sensors
///
/// # Responses
/// - 200 (Success): The page
/// - 303 (See Other): Not logged in
/// - 404 (Not Found): The user has no active sensors
#[utoipa::path(
    get,
    path = "/complex/sensors/",
    tag = SENSOR_TAG,
    responses(
        (status = 200, description = "First page of sensors", body = PageDto<SensorDto>),
        (status = 303, description = "Login required"),
        (status = 404, description = "No active sensors", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sensors(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    sensor_page(&state, &current, 0).await
}

#[utoipa::path(
    get,
    path = "/complex/sensors/page/{page}/",
    tag = SENSOR_TAG,
    params(("page" = u64, Path, description = "Zero-based page number")),
    responses(
        (status = 200, description = "Page of sensors", body = PageDto<SensorDto>),
        (status = 303, description = "Login required"),
        (status = 404, description = "No active sensors", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sensors_page(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(page): Path<u64>,
) -> Result<impl IntoResponse, Error> {
    sensor_page(&state, &current, page).await
}

/// One of the user's sensors
///
/// # Responses
/// - 200 (Success): The sensor
/// - 303 (See Other): Not logged in, or the sensor is missing, deleted or someone else's
///   (redirect to the eperm page)
#[utoipa::path(
    get,
    path = "/complex/sensors/{id}/",
    tag = SENSOR_TAG,
    params(("id" = i32, Path, description = "Sensor id")),
    responses(
        (status = 200, description = "Sensor detail", body = DetailDto<SensorDto>),
        (status = 303, description = "Login required, or not visible to this user"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sensor(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<Response, Error> {
    let Some(sensor) = SensorService::new(&state.db).get(current.id(), id).await? else {
        return Ok(redirect_to_record_page(RecordPage::Eperm, KIND, id).into_response());
    };

    Ok(Json(DetailDto {
        title: KIND.detail_title(),
        item: sensor,
    })
    .into_response())
}

/// Create form with the default values
#[utoipa::path(
    get,
    path = "/complex/sensors/create/",
    tag = SENSOR_TAG,
    responses(
        (status = 200, description = "Create form", body = FormDto<SensorForm>),
        (status = 303, description = "Login or add permission required"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_sensor_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Add).await?;

    form_document(&session, Action::Add.form_title(KIND), SensorForm::initial()).await
}

/// Registers a sensor
///
/// The serial number is stored uppercased and must be unique across all users.
///
/// # Responses
/// - 303 (See Other): Created, redirect to the created page; or login/permission required
/// - 400 (Bad Request): Field errors
/// - 403 (Forbidden): CSRF token missing or incorrect
#[utoipa::path(
    post,
    path = "/complex/sensors/create/",
    tag = SENSOR_TAG,
    request_body(content = SensorForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created, or login or add permission required"),
        (status = 400, description = "Field errors", body = FormErrorDto),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_sensor(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Form(form): Form<SensorForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Add).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let input = form.clean_new()?;
    let sensor = SensorService::new(&state.db)
        .create(current.id(), input)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Created, KIND, sensor.id))
}

/// Update form prefilled with the current sensor
#[utoipa::path(
    get,
    path = "/complex/sensors/update/{id}/",
    tag = SENSOR_TAG,
    params(("id" = i32, Path, description = "Sensor id")),
    responses(
        (status = 200, description = "Update form", body = FormDto<SensorForm>),
        (status = 303, description = "Login or change permission required"),
        (status = 404, description = "Sensor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_sensor_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Change).await?;

    let sensor = SensorService::new(&state.db)
        .get_model(current.id(), id)
        .await?;

    form_document(
        &session,
        Action::Change.form_title(KIND),
        SensorForm::from_model(&sensor),
    )
    .await
}

/// Updates a sensor
///
/// A submitted `serial_no` is ignored; the serial number is fixed once registered.
#[utoipa::path(
    post,
    path = "/complex/sensors/update/{id}/",
    tag = SENSOR_TAG,
    params(("id" = i32, Path, description = "Sensor id")),
    request_body(content = SensorForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated, or login or change permission required"),
        (status = 400, description = "Field errors", body = FormErrorDto),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 404, description = "Sensor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_sensor(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
    Form(form): Form<SensorForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Change).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let input = form.clean()?;
    let sensor = SensorService::new(&state.db)
        .update(current.id(), id, input)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Updated, KIND, sensor.id))
}

#[utoipa::path(
    get,
    path = "/complex/sensors/delete/{id}/",
    tag = SENSOR_TAG,
    params(("id" = i32, Path, description = "Sensor id")),
    responses(
        (status = 200, description = "Delete confirmation form", body = FormDto<SensorForm>),
        (status = 303, description = "Login or delete permission required"),
        (status = 404, description = "Sensor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_sensor_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Delete).await?;

    let sensor = SensorService::new(&state.db)
        .get_model(current.id(), id)
        .await?;

    form_document(
        &session,
        Action::Delete.form_title(KIND),
        SensorForm::from_model(&sensor),
    )
    .await
}

/// Soft deletes a sensor
///
/// The row is kept with `deleted` set and drops out of every read.
#[utoipa::path(
    post,
    path = "/complex/sensors/delete/{id}/",
    tag = SENSOR_TAG,
    params(("id" = i32, Path, description = "Sensor id")),
    request_body(content = ConfirmForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Deleted, or login or delete permission required"),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 404, description = "Sensor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_sensor(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
    Form(form): Form<ConfirmForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Delete).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let sensor = SensorService::new(&state.db)
        .delete(current.id(), id)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Deleted, KIND, sensor.id))
}
