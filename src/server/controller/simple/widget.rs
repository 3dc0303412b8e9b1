use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DetailDto, ErrorDto, FormDto, FormErrorDto, PageDto},
        simple::{WidgetAggrDto, WidgetDto},
    },
    server::{
        controller::util::{
            csrf::validate_csrf, current_user::CurrentUser, form_document,
            redirect_to_record_page,
        },
        error::Error,
        form::{simple::WidgetForm, ConfirmForm},
        model::{
            app::AppState,
            kind::{Action, EntityKind},
        },
        service::simple::widget::WidgetService,
        util::{links::RecordPage, pagination::Pagination},
    },
};

pub static WIDGET_TAG: &str = "widget";

const KIND: EntityKind = EntityKind::Widget;

async fn widget_page(
    state: &AppState,
    current: &CurrentUser,
    page: u64,
) -> Result<Json<PageDto<WidgetDto>>, Error> {
    let pagination = Pagination::new(page, state.page_size(KIND));
    let page = WidgetService::new(&state.db)
        .list(current.id(), pagination)
        .await?;

    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/simple/widgets/",
    tag = WIDGET_TAG,
    responses(
        (status = 200, description = "First page of widgets", body = PageDto<WidgetDto>),
        (status = 303, description = "Login required"),
        (status = 404, description = "No active widgets", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_widgets(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    widget_page(&state, &current, 0).await
}

#[utoipa::path(
    get,
    path = "/simple/widgets/page/{page}/",
    tag = WIDGET_TAG,
    params(("page" = u64, Path, description = "Zero-based page number")),
    responses(
        (status = 200, description = "Page of widgets", body = PageDto<WidgetDto>),
        (status = 303, description = "Login required"),
        (status = 404, description = "No active widgets", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_widgets_page(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(page): Path<u64>,
) -> Result<impl IntoResponse, Error> {
    widget_page(&state, &current, page).await
}

/// One of the user's widgets
///
/// # Responses
/// - 200 (Success): The widget
/// - 303 (See Other): Not logged in, or the widget is missing, deleted or someone else's
///   (redirect to the eperm page)
#[utoipa::path(
    get,
    path = "/simple/widgets/{id}/",
    tag = WIDGET_TAG,
    params(("id" = i32, Path, description = "Widget id")),
    responses(
        (status = 200, description = "Widget detail", body = DetailDto<WidgetDto>),
        (status = 303, description = "Login required, or not visible to this user"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_widget(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<Response, Error> {
    let Some(widget) = WidgetService::new(&state.db).get(current.id(), id).await? else {
        return Ok(redirect_to_record_page(RecordPage::Eperm, KIND, id).into_response());
    };

    Ok(Json(DetailDto {
        title: KIND.detail_title(),
        item: widget,
    })
    .into_response())
}

/// Sum of widget cost over one page of the user's active widgets
///
/// An empty page sums to zero.
#[utoipa::path(
    get,
    path = "/simple/widgets/aggr/{page}/",
    tag = WIDGET_TAG,
    params(("page" = u64, Path, description = "Zero-based page number")),
    responses(
        (status = 200, description = "Page aggregate", body = WidgetAggrDto),
        (status = 303, description = "Login required"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_widget_aggregate(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(page): Path<u64>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::new(page, state.page_size(KIND));
    let aggregate = WidgetService::new(&state.db)
        .aggregate(current.id(), pagination)
        .await?;

    Ok(Json(aggregate))
}

/// Create form with the default values
#[utoipa::path(
    get,
    path = "/simple/widgets/create/",
    tag = WIDGET_TAG,
    responses(
        (status = 200, description = "Create form", body = FormDto<WidgetForm>),
        (status = 303, description = "Login or add permission required"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_widget_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Add).await?;

    form_document(&session, Action::Add.form_title(KIND), WidgetForm::initial()).await
}

/// Creates a widget
///
/// # Responses
/// - 303 (See Other): Created, redirect to the created page; or login/permission required
/// - 400 (Bad Request): Field errors
/// - 403 (Forbidden): CSRF token missing or incorrect
#[utoipa::path(
    post,
    path = "/simple/widgets/create/",
    tag = WIDGET_TAG,
    request_body(content = WidgetForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created, or login or add permission required"),
        (status = 400, description = "Field errors", body = FormErrorDto),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_widget(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Form(form): Form<WidgetForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Add).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let input = form.clean()?;
    let widget = WidgetService::new(&state.db)
        .create(current.id(), input)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Created, KIND, widget.id))
}

/// Update form prefilled with the current widget
#[utoipa::path(
    get,
    path = "/simple/widgets/update/{id}/",
    tag = WIDGET_TAG,
    params(("id" = i32, Path, description = "Widget id")),
    responses(
        (status = 200, description = "Update form", body = FormDto<WidgetForm>),
        (status = 303, description = "Login or change permission required"),
        (status = 404, description = "Widget not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_widget_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Change).await?;

    let widget = WidgetService::new(&state.db)
        .get_model(current.id(), id)
        .await?;

    form_document(
        &session,
        Action::Change.form_title(KIND),
        WidgetForm::from_model(&widget),
    )
    .await
}

#[utoipa::path(
    post,
    path = "/simple/widgets/update/{id}/",
    tag = WIDGET_TAG,
    params(("id" = i32, Path, description = "Widget id")),
    request_body(content = WidgetForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated, or login or change permission required"),
        (status = 400, description = "Field errors", body = FormErrorDto),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 404, description = "Widget not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_widget(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
    Form(form): Form<WidgetForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Change).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let input = form.clean()?;
    let widget = WidgetService::new(&state.db)
        .update(current.id(), id, input)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Updated, KIND, widget.id))
}

#[utoipa::path(
    get,
    path = "/simple/widgets/delete/{id}/",
    tag = WIDGET_TAG,
    params(("id" = i32, Path, description = "Widget id")),
    responses(
        (status = 200, description = "Delete confirmation form", body = FormDto<WidgetForm>),
        (status = 303, description = "Login or delete permission required"),
        (status = 404, description = "Widget not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_widget_form(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Delete).await?;

    let widget = WidgetService::new(&state.db)
        .get_model(current.id(), id)
        .await?;

    form_document(
        &session,
        Action::Delete.form_title(KIND),
        WidgetForm::from_model(&widget),
    )
    .await
}

/// Soft deletes a widget
///
/// The row is kept with `deleted` set and drops out of every read.
#[utoipa::path(
    post,
    path = "/simple/widgets/delete/{id}/",
    tag = WIDGET_TAG,
    params(("id" = i32, Path, description = "Widget id")),
    request_body(content = ConfirmForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Deleted, or login or delete permission required"),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 404, description = "Widget not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_widget(
    State(state): State<AppState>,
    session: Session,
    current: CurrentUser,
    Path(id): Path<i32>,
    Form(form): Form<ConfirmForm>,
) -> Result<impl IntoResponse, Error> {
    current.require(&state, KIND, Action::Delete).await?;
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let widget = WidgetService::new(&state.db)
        .delete(current.id(), id)
        .await?;

    Ok(redirect_to_record_page(RecordPage::Deleted, KIND, widget.id))
}
