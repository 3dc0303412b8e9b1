use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DetailDto, ErrorDto, FormDto, FormErrorDto, PageDto},
        complex::EventDto,
    },
    server::{
        controller::util::{
            csrf::validate_csrf, current_user::CurrentUser, form_document,
            redirect_to_record_page,
        },
        error::Error,
        form::{complex::EventForm, ConfirmForm},
        model::{
            app::AppState,
            kind::{Action, EntityKind},
        },
        service::complex::event::EventService,
        util::{links::RecordPage, pagination::Pagination},
    },
};

pub static EVENT_TAG: &str = "event";

const KIND: EntityKind = EntityKind::Event;

async fn event_page(
    state: &AppState,
    current: &CurrentUser,
    page: u64,
) -> Result<Json<PageDto<EventDto>>, Error> {
    let pagination = Pagination::new(page, state.page_size(KIND));
    let page = EventService::new(&state.db)
        .list(current.id(), pagination)
        .await?;

    Ok(Json(page))
}

/// First page of the user's active events
///
/// # Responses
/// - 200 (Success): The page
/// - 303 (See Other): Not logged in
/// - 404 (Not Found): The user has no active events
#[utoipa::path(
    get,
    path = "/complex/events/",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "First page of events", body = PageDto<EventDto>),
        (status = 303, description = "Login required"),
        (status = 404, description = "No active events", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    event_page(&state, &current, 0).await
}

#[utoipa::path(
    get,
    path = "/complex/events/page/{page}/",
    tag = EVENT_TAG,
    params(("page" = u64, Path, description = "Zero-based page number")),
    responses(
        (status = 200, description = "Page of events", body = PageDto<EventDto>),
        (status = 303, description = "Login required"),
        (status = 404, description = "No active events", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events_page(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(page): Path<u64>,
) -> Result<impl IntoResponse, Error> {
    event_page(&state, &current, page).await
}

/// One of the user's events
///
/// # Responses
/// - 200 (Success): The event
/// - 303 (See Other): Not logged in, or the event is missing, deleted or someone else's
///   (redirect to the eperm page)
#[utoipa::path(
    get,
    path = "/complex/events/{id}/",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event detail", body = DetailDto<EventDto>),
        (status = 303, description = "Login required, or not visible to this user"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<Response, Error> {
    let Some(event) = EventService::new(&state.db).get(current.id(), id).await? else {
        return Ok(redirect_to_record_page(RecordPage::Eperm, KIND, id).into_response());
    };

    Ok(Json(DetailDto {
        title: KIND.detail_title(),
        item: event,
    })
    .into_response())
}

/// Create form with the default values
#[utoipa::path(
    get,
    path = "/complex/events/create/",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Create form", body = FormDto<EventForm>),
        (status = 303, description = "Login or add permission required"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Add).await?;

    form_document(&session, Action::Add.form_title(KIND), EventForm::initial()).await
}

/// Records an event
///
/// # Responses
/// - 303 (See Other): Created, redirect to the created page; or login/permission required
/// - 400 (Bad Request): Field errors, including a sensor that isn't one of the user's own
/// - 403 (Forbidden): CSRF token missing or incorrect
#[utoipa::path(
    post,
    path = "/complex/events/create/",
    tag = EVENT_TAG,
    request_body(content = EventForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created, or login or add permission required"),
        (status = 400, description = "Field errors", body = FormErrorDto),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Form(form): Form<EventForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Add).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let input = form.clean()?;
    let event = EventService::new(&state.db)
        .create(current.id(), input)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Created, KIND, event.id))
}

#[utoipa::path(
    get,
    path = "/complex/events/update/{id}/",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Update form", body = FormDto<EventForm>),
        (status = 303, description = "Login or change permission required"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Change).await?;

    let event = EventService::new(&state.db)
        .get_model(current.id(), id)
        .await?;

    form_document(
        &session,
        Action::Change.form_title(KIND),
        EventForm::from_model(&event),
    )
    .await
}

#[utoipa::path(
    post,
    path = "/complex/events/update/{id}/",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    request_body(content = EventForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated, or login or change permission required"),
        (status = 400, description = "Field errors", body = FormErrorDto),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
    Form(form): Form<EventForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Change).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let input = form.clean()?;
    let event = EventService::new(&state.db)
        .update(current.id(), id, input)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Updated, KIND, event.id))
}

#[utoipa::path(
    get,
    path = "/complex/events/delete/{id}/",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Delete confirmation form", body = FormDto<EventForm>),
        (status = 303, description = "Login or delete permission required"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Delete).await?;

    let event = EventService::new(&state.db)
        .get_model(current.id(), id)
        .await?;

    form_document(
        &session,
        Action::Delete.form_title(KIND),
        EventForm::from_model(&event),
    )
    .await
}

/// Soft deletes an event
///
/// The row is kept with `deleted` set and drops out of every read.
#[utoipa::path(
    post,
    path = "/complex/events/delete/{id}/",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    request_body(content = ConfirmForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Deleted, or login or delete permission required"),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
    Form(form): Form<ConfirmForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Delete).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let event = EventService::new(&state.db)
        .delete(current.id(), id)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Deleted, KIND, event.id))
}
