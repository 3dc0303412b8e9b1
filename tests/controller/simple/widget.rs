use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use popular::server::{
    controller::simple::widget::{create_widget, get_widget_aggregate, list_widgets},
    form::simple::WidgetForm,
};
use rust_decimal::Decimal;

use super::*;

#[tokio::test]
/// Expect the page to link to its aggregate, which sums only that page
async fn aggregate_sums_the_page() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_simple_tables().build().await?;
    let user = test.user().insert_user("qa").await?;
    for (n, cents) in [150, 250, 1000, 75].into_iter().enumerate() {
        test.simple()
            .insert_widget(
                user.id,
                &format!("w{}", n),
                &format!("111-111-1{}", n),
                Decimal::new(cents, 2),
            )
            .await?;
    }

    let (state, current) = test.login_as(user.id, "/simple/widgets/").await;
    let page = json_body(
        list_widgets(State(state), current)
            .await
            .unwrap()
            .into_response(),
    )
    .await;
    assert_eq!(page["aggr"], "/simple/widgets/aggr/0/");

    let (state, current) = test.login_as(user.id, "/simple/widgets/aggr/0/").await;
    let resp = get_widget_aggregate(State(state), current, Path(0))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let aggr: popular::model::simple::WidgetAggrDto =
        serde_json::from_value(json_body(resp).await).unwrap();

    assert_eq!(aggr.title, "Simple: Total Widget Cost");
    assert_eq!(aggr.cost_sum, Decimal::new(1475, 2));

    Ok(())
}

#[tokio::test]
/// Expect 0.00 for a page past the end
async fn aggregate_of_empty_page_is_zero() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_simple_tables().build().await?;
    let user = test.user().insert_user("qa").await?;
    let (state, current) = test.login_as(user.id, "/simple/widgets/aggr/9/").await;

    let resp = get_widget_aggregate(State(state), current, Path(9))
        .await
        .unwrap()
        .into_response();
    let aggr: popular::model::simple::WidgetAggrDto =
        serde_json::from_value(json_body(resp).await).unwrap();

    assert!(aggr.cost_sum.is_zero());

    Ok(())
}

#[tokio::test]
/// Expect SKU format and cost range errors together
async fn rejects_bad_sku_and_cost() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_simple_tables().build().await?;
    let user = test.user().insert_superuser("admin").await?;
    let (state, current) = test.login_as(user.id, "/simple/widgets/create/").await;
    let csrf = test.csrf_token().await;

    let resp = create_widget(
        State(state),
        test.session.clone(),
        current,
        Form(WidgetForm {
            name: Some("gear".to_string()),
            sku: Some("12-34".to_string()),
            cost: Some("-1".to_string()),
            csrfmiddlewaretoken: csrf,
        }),
    )
    .await
    .err()
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(
        body["errors"]["sku"][0],
        "Enter a valid SKU in the form 123-456-78."
    );
    assert_eq!(
        body["errors"]["cost"][0],
        "Ensure this value is greater than or equal to 0."
    );

    Ok(())
}
