use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use popular::server::{
    controller::simple::inventory::{create_inventory, get_inventory_aggregate},
    form::simple::InventoryForm,
};
use rust_decimal::Decimal;

use super::*;

#[tokio::test]
/// Expect another user's widget to be rejected as an invalid choice
async fn rejects_foreign_widget() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_simple_tables().build().await?;
    let user = test
        .user()
        .insert_user_with_permissions("stocker", &[("simple", "add_inventory")])
        .await?;
    let other = test.user().insert_user("other").await?;
    let store = test.simple().insert_store(user.id, "Mine", "Berkeley").await?;
    let widget = test
        .simple()
        .insert_widget(other.id, "Theirs", "111-111-11", Decimal::ZERO)
        .await?;
    let (state, current) = test.login_as(user.id, "/simple/inventories/create/").await;
    let csrf = test.csrf_token().await;

    let resp = create_inventory(
        State(state),
        test.session.clone(),
        current,
        Form(InventoryForm {
            store: Some(store.id.to_string()),
            widget: Some(widget.id.to_string()),
            quantity: Some("3".to_string()),
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
        body["errors"]["widget"][0],
        "Select a valid choice. That choice is not one of the available choices."
    );
    assert!(body["errors"].get("store").is_none());

    Ok(())
}

#[tokio::test]
/// Expect a negative quantity to be rejected
async fn rejects_negative_quantity() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_simple_tables().build().await?;
    let user = test.user().insert_superuser("admin").await?;
    let (state, current) = test.login_as(user.id, "/simple/inventories/create/").await;
    let csrf = test.csrf_token().await;

    let resp = create_inventory(
        State(state),
        test.session.clone(),
        current,
        Form(InventoryForm {
            store: Some("1".to_string()),
            widget: Some("1".to_string()),
            quantity: Some("-5".to_string()),
            csrfmiddlewaretoken: csrf,
        }),
    )
    .await
    .err()
    .unwrap()
    .into_response();

    let body = json_body(resp).await;
    assert_eq!(
        body["errors"]["quantity"][0],
        "Ensure this value is greater than or equal to 0."
    );

    Ok(())
}

#[tokio::test]
/// Expect quantities of the page to be summed, skipping deleted inventories
async fn aggregate_sums_quantities() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_simple_tables().build().await?;
    let user = test.user().insert_user("qa").await?;
    test.simple()
        .insert_inventory_with_parents(user.id, 1, 4)
        .await?;
    test.simple()
        .insert_inventory_with_parents(user.id, 2, 6)
        .await?;
    let deleted = test
        .simple()
        .insert_inventory_with_parents(user.id, 3, 100)
        .await?;
    popular::server::service::simple::inventory::InventoryService::new(&test.db)
        .delete(user.id, deleted.id)
        .await
        .unwrap();
    let (state, current) = test.login_as(user.id, "/simple/inventories/aggr/0/").await;

    let resp = get_inventory_aggregate(State(state), current, Path(0))
        .await
        .unwrap()
        .into_response();

    let body = json_body(resp).await;
    assert_eq!(body["quantity_sum"], 10);
    assert_eq!(body["title"], "Simple: Total Inventory Quantities");

    Ok(())
}
