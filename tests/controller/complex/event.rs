use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use popular::server::{
    controller::complex::event::{create_event, get_events_page, list_events},
    form::complex::EventForm,
};

use super::*;

fn event_form(sensor_id: i32, csrf: Option<String>) -> EventForm {
    EventForm {
        sensor: Some(sensor_id.to_string()),
        timestamp: Some("2025-10-17 08:15:00".to_string()),
        csrfmiddlewaretoken: csrf,
        ..EventForm::initial()
    }
}

#[tokio::test]
/// Expect an event on the user's own sensor to be recorded
async fn records_event() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_complex_tables().build().await?;
    let user = test
        .user()
        .insert_user_with_permissions("pilot", &[("complex", "add_event")])
        .await?;
    let sensor = test.complex().insert_sensor(user.id, "NOSE1").await?;
    let (state, current) = test.login_as(user.id, "/complex/events/create/").await;
    let csrf = test.csrf_token().await;

    let mut form = event_form(sensor.id, csrf);
    form.avg_temp = Some("21.5".to_string());
    form.pct_humidity = Some("55".to_string());

    let resp = create_event(State(state), test.session.clone(), current, Form(form))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(location(&resp).starts_with("/complex/created/"));

    Ok(())
}

#[tokio::test]
/// Expect range and reference errors reported together
async fn rejects_out_of_range_readings() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_complex_tables().build().await?;
    let user = test.user().insert_superuser("admin").await?;
    let (state, current) = test.login_as(user.id, "/complex/events/create/").await;
    let csrf = test.csrf_token().await;

    let mut form = event_form(999, csrf);
    form.pct_humidity = Some("101".to_string());
    form.windspeed = Some("-3".to_string());

    let resp = create_event(State(state), test.session.clone(), current, Form(form))
        .await
        .err()
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(
        body["errors"]["pct_humidity"][0],
        "Ensure this value is less than or equal to 100."
    );
    assert_eq!(
        body["errors"]["windspeed"][0],
        "Ensure this value is greater than or equal to 0."
    );

    Ok(())
}

#[tokio::test]
/// Expect five events per page on the complex lists
async fn lists_five_per_page() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_complex_tables().build().await?;
    let user = test.user().insert_user("qa").await?;
    let sensor = test.complex().insert_sensor(user.id, "WING1").await?;
    for _ in 0..6 {
        test.complex().insert_event(user.id, sensor.id).await?;
    }

    let (state, current) = test.login_as(user.id, "/complex/events/").await;
    let first = json_body(
        list_events(State(state), current)
            .await
            .unwrap()
            .into_response(),
    )
    .await;
    assert_eq!(first["title"], "Complex: Active Events");
    assert_eq!(first["items"].as_array().unwrap().len(), 5);
    assert_eq!(first["next"], "/complex/events/page/1/");

    let (state, current) = test.login_as(user.id, "/complex/events/page/1/").await;
    let second = json_body(
        get_events_page(State(state), current, Path(1))
            .await
            .unwrap()
            .into_response(),
    )
    .await;
    assert_eq!(second["items"].as_array().unwrap().len(), 1);
    assert_eq!(second["aggr"], serde_json::Value::Null);

    Ok(())
}
