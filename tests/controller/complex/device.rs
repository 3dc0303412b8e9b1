use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use popular::server::{
    controller::complex::device::{
        create_device, delete_device, get_device, list_devices, update_device,
    },
    form::{complex::DeviceForm, ConfirmForm},
};
use sea_orm::EntityTrait;

use super::*;

fn device_form(name: &str, sku: &str, csrf: Option<String>) -> DeviceForm {
    DeviceForm {
        name: Some(name.to_string()),
        sku: Some(sku.to_string()),
        night_vision: Some("on".to_string()),
        weather: None,
        csrfmiddlewaretoken: csrf,
    }
}

#[tokio::test]
/// Expect a created device to keep its checkboxes and get its links
async fn create_sets_flags_and_links() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_complex_tables().build().await?;
    let user = test
        .user()
        .insert_user_with_permissions("fitter", &[("complex", "add_device")])
        .await?;
    let (state, current) = test.login_as(user.id, "/complex/devices/create/").await;
    let csrf = test.csrf_token().await;

    let resp = create_device(
        State(state),
        test.session.clone(),
        current,
        Form(device_form("cam", "CAM-1", csrf)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let id: i32 = location(&resp)
        .trim_start_matches("/complex/created/")
        .trim_end_matches('/')
        .parse()
        .unwrap();

    let (state, current) = test.login_as(user.id, "/").await;
    let body = json_body(
        get_device(State(state), current, Path(id))
            .await
            .unwrap()
            .into_response(),
    )
    .await;
    assert_eq!(body["title"], "Complex: Device Detail");
    assert_eq!(body["item"]["night_vision"], true);
    assert_eq!(body["item"]["weather"], false);
    assert_eq!(body["item"]["dlink"], format!("/complex/devices/delete/{}/", id));

    Ok(())
}

#[tokio::test]
/// Expect 400 with the duplicate message on the clashing field
async fn duplicate_sku_is_a_field_error() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_complex_tables().build().await?;
    let user = test.user().insert_superuser("admin").await?;
    test.complex()
        .insert_device(user.id, "cam", "111-111-11")
        .await?;
    let (state, current) = test.login_as(user.id, "/complex/devices/create/").await;
    let csrf = test.csrf_token().await;

    let resp = create_device(
        State(state),
        test.session.clone(),
        current,
        Form(device_form("doorbell", "111-111-11", csrf)),
    )
    .await
    .err()
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(
        body["errors"]["sku"][0],
        "Sku already selected, please choose another."
    );
    assert!(body["errors"]["name"].is_null());

    Ok(())
}

#[tokio::test]
/// Expect an update to replace the fields and redirect to the updated page
async fn update_replaces_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_complex_tables().build().await?;
    let user = test
        .user()
        .insert_user_with_permissions("fitter", &[("complex", "change_device")])
        .await?;
    let device = test
        .complex()
        .insert_device(user.id, "cam", "111-111-11")
        .await?;
    let (state, current) = test.login_as(user.id, "/").await;
    let csrf = test.csrf_token().await;

    let resp = update_device(
        State(state),
        test.session.clone(),
        current,
        Path(device.id),
        Form(device_form("porch cam", "222-222-22", csrf)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(location(&resp), format!("/complex/updated/{}/", device.id));
    let stored = entity::prelude::ComplexDevice::find_by_id(device.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "porch cam");
    assert_eq!(stored.sku, "222-222-22");
    assert!(stored.night_vision);

    Ok(())
}

#[tokio::test]
/// Expect another user's device to be 404 on update
async fn update_of_foreign_device_is_404() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_complex_tables().build().await?;
    let owner = test.user().insert_user("owner").await?;
    let other = test.user().insert_superuser("other").await?;
    let device = test
        .complex()
        .insert_device(owner.id, "cam", "111-111-11")
        .await?;
    let (state, current) = test.login_as(other.id, "/").await;
    let csrf = test.csrf_token().await;

    let resp = update_device(
        State(state),
        test.session.clone(),
        current,
        Path(device.id),
        Form(device_form("mine now", "333-333-33", csrf)),
    )
    .await
    .err()
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect a deleted device to stay in the table but redirect to eperm on detail
async fn soft_delete_then_eperm() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_complex_tables().build().await?;
    let user = test
        .user()
        .insert_user_with_permissions("fitter", &[("complex", "delete_device")])
        .await?;
    let device = test
        .complex()
        .insert_device(user.id, "cam", "111-111-11")
        .await?;
    let (state, current) = test.login_as(user.id, "/").await;
    let csrf = test.csrf_token().await;

    let resp = delete_device(
        State(state),
        test.session.clone(),
        current,
        Path(device.id),
        Form(ConfirmForm {
            csrfmiddlewaretoken: csrf,
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(location(&resp), format!("/complex/deleted/{}/", device.id));

    let stored = entity::prelude::ComplexDevice::find_by_id(device.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(stored.deleted);

    let (state, current) = test.login_as(user.id, "/").await;
    let resp = get_device(State(state), current, Path(device.id))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), format!("/complex/eperm/{}/", device.id));

    let (state, current) = test.login_as(user.id, "/").await;
    let resp = list_devices(State(state), current)
        .await
        .err()
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
