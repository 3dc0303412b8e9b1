use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use popular::server::{
    controller::complex::sensor::{create_sensor, get_sensor, update_sensor, update_sensor_form},
    form::complex::SensorForm,
};
use sea_orm::EntityTrait;

use super::*;

fn sensor_form(serial_no: &str, csrf: Option<String>) -> SensorForm {
    SensorForm {
        name: Some("probe".to_string()),
        sku: Some("123-456-78".to_string()),
        serial_no: Some(serial_no.to_string()),
        temp_units: Some("0".to_string()),
        csrfmiddlewaretoken: csrf,
        ..SensorForm::initial()
    }
}

#[tokio::test]
/// Expect the serial number uppercased, omitted choices defaulted and the install date set
async fn creates_with_defaults() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_complex_tables().build().await?;
    let user = test
        .user()
        .insert_user_with_permissions("tech", &[("complex", "add_sensor")])
        .await?;
    let (state, current) = test.login_as(user.id, "/complex/sensors/create/").await;
    let csrf = test.csrf_token().await;

    let mut form = sensor_form("ab12cd", csrf);
    form.ws_units = None;

    let resp = create_sensor(State(state), test.session.clone(), current, Form(form))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let sensor = entity::prelude::ComplexSensor::find()
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(location(&resp), format!("/complex/created/{}/", sensor.id));
    assert_eq!(sensor.serial_no, "AB12CD");
    assert_eq!(
        sensor.temp_units,
        entity::sea_orm_active_enums::TempUnits::Fahrenheit
    );
    assert_eq!(
        sensor.ws_units,
        entity::sea_orm_active_enums::WsUnits::KilometersPerHour
    );
    assert_eq!(sensor.installed, chrono::Utc::now().date_naive());

    Ok(())
}

#[tokio::test]
/// Expect an unknown choice code to name the rejected value
async fn rejects_unknown_choice() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_complex_tables().build().await?;
    let user = test.user().insert_superuser("admin").await?;
    let (state, current) = test.login_as(user.id, "/complex/sensors/create/").await;
    let csrf = test.csrf_token().await;

    let mut form = sensor_form("AB12", csrf);
    form.temp_units = Some("9".to_string());

    let resp = create_sensor(State(state), test.session.clone(), current, Form(form))
        .await
        .err()
        .unwrap()
        .into_response();

    let body = json_body(resp).await;
    assert_eq!(
        body["errors"]["temp_units"][0],
        "Select a valid choice. 9 is not one of the available choices."
    );

    Ok(())
}

#[tokio::test]
/// Expect a serial number registered by another user to clash
async fn serial_no_is_unique_across_users() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_complex_tables().build().await?;
    let user = test.user().insert_superuser("admin").await?;
    let other = test.user().insert_user("other").await?;
    test.complex().insert_sensor(other.id, "TAKEN1").await?;
    let (state, current) = test.login_as(user.id, "/complex/sensors/create/").await;
    let csrf = test.csrf_token().await;

    let resp = create_sensor(
        State(state),
        test.session.clone(),
        current,
        Form(sensor_form("taken1", csrf)),
    )
    .await
    .err()
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(
        body["errors"]["serial_no"][0],
        "Serial no already selected, please choose another."
    );

    Ok(())
}

#[tokio::test]
/// Expect the update form prefilled and an update to leave the serial number alone
async fn update_keeps_serial_no() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_complex_tables().build().await?;
    let user = test
        .user()
        .insert_user_with_permissions("tech", &[("complex", "change_sensor")])
        .await?;
    let sensor = test.complex().insert_sensor(user.id, "FIXED9").await?;

    let (state, current) = test.login_as(user.id, "/").await;
    let resp = update_sensor_form(State(state), test.session.clone(), current, Path(sensor.id))
        .await
        .unwrap()
        .into_response();
    let body = json_body(resp).await;
    assert_eq!(body["title"], "Update an Existing Sensor");
    assert_eq!(body["initial"]["serial_no"], "FIXED9");

    let (state, current) = test.login_as(user.id, "/").await;
    let csrf = test.csrf_token().await;
    let mut form = sensor_form("OTHER1", csrf);
    form.name = Some("renamed".to_string());
    update_sensor(
        State(state),
        test.session.clone(),
        current,
        Path(sensor.id),
        Form(form),
    )
    .await
    .unwrap();

    let (state, current) = test.login_as(user.id, "/").await;
    let body = json_body(
        get_sensor(State(state), current, Path(sensor.id))
            .await
            .unwrap()
            .into_response(),
    )
    .await;
    assert_eq!(body["item"]["name"], "renamed");
    assert_eq!(body["item"]["serial_no"], "FIXED9");
    assert_eq!(body["item"]["temp_units"]["label"], "Fahrenheit");

    Ok(())
}
