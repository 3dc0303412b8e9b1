use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use popular::server::{
    controller::complex::{
        device::delete_device,
        meter::{create_meter, get_meter},
    },
    form::{complex::MeterForm, ConfirmForm},
};

use super::*;

#[tokio::test]
/// Expect meters only on live devices the user owns
async fn requires_live_own_device() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_complex_tables().build().await?;
    let user = test.user().insert_superuser("admin").await?;
    let device = test
        .complex()
        .insert_device(user.id, "cam", "111-111-11")
        .await?;

    let (state, current) = test.login_as(user.id, "/").await;
    let csrf = test.csrf_token().await;
    delete_device(
        State(state),
        test.session.clone(),
        current,
        Path(device.id),
        Form(ConfirmForm {
            csrfmiddlewaretoken: csrf.clone(),
        }),
    )
    .await
    .unwrap();

    let (state, current) = test.login_as(user.id, "/complex/meters/create/").await;
    let resp = create_meter(
        State(state),
        test.session.clone(),
        current,
        Form(MeterForm {
            device: Some(device.id.to_string()),
            location: None,
            csrfmiddlewaretoken: csrf,
        }),
    )
    .await
    .err()
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert!(body["errors"]["device"].is_array());

    Ok(())
}

#[tokio::test]
/// Expect an omitted location to default to the cockpit
async fn location_defaults_to_cockpit() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_complex_tables().build().await?;
    let user = test
        .user()
        .insert_user_with_permissions("fitter", &[("complex", "meter.full_access")])
        .await?;
    let device = test
        .complex()
        .insert_device(user.id, "cam", "111-111-11")
        .await?;
    let (state, current) = test.login_as(user.id, "/complex/meters/create/").await;
    let csrf = test.csrf_token().await;

    let resp = create_meter(
        State(state),
        test.session.clone(),
        current,
        Form(MeterForm {
            device: Some(device.id.to_string()),
            location: None,
            csrfmiddlewaretoken: csrf,
        }),
    )
    .await
    .unwrap()
    .into_response();
    let id: i32 = location(&resp)
        .trim_start_matches("/complex/created/")
        .trim_end_matches('/')
        .parse()
        .unwrap();

    let (state, current) = test.login_as(user.id, "/").await;
    let body = json_body(
        get_meter(State(state), current, Path(id))
            .await
            .unwrap()
            .into_response(),
    )
    .await;
    assert_eq!(body["item"]["location"]["label"], "Cockpit");
    assert_eq!(body["item"]["device_id"], device.id);

    Ok(())
}
