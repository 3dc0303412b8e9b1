//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every route is registered here together with its OpenAPI document, and Swagger UI is
//! served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth,
        complex::{device, event, meter, sensor},
        home, page,
        simple::{inventory, store, widget},
    },
    model::app::AppState,
};

/// Builds the application's HTTP router with every endpoint and the Swagger UI.
///
/// Paths follow `/<app>/<entities>/...` with a trailing slash. A route answers only the
/// methods registered for it; anything else is a 405.
///
/// # OpenAPI Documentation
/// The OpenAPI document is available at `/api/docs/openapi.json`.
///
/// # Returns
/// A `Router<AppState>` ready for the session layer and state.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Popular", description = "Simple and complex CRUD apps"),
        tags(
            (name = auth::AUTH_TAG, description = "Login, logout and the current user"),
            (name = home::HOME_TAG, description = "Home pages"),
            (name = page::PAGE_TAG, description = "Confirmation and error pages"),
            (name = store::STORE_TAG, description = "Simple app stores"),
            (name = widget::WIDGET_TAG, description = "Simple app widgets"),
            (name = inventory::INVENTORY_TAG, description = "Simple app inventories"),
            (name = sensor::SENSOR_TAG, description = "Complex app sensors"),
            (name = event::EVENT_TAG, description = "Complex app sensor events"),
            (name = device::DEVICE_TAG, description = "Complex app devices"),
            (name = meter::METER_TAG, description = "Complex app meters"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login_form, auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(home::home))
        .routes(routes!(home::simple_home))
        .routes(routes!(home::complex_home))
        .routes(routes!(page::simple_created))
        .routes(routes!(page::simple_updated))
        .routes(routes!(page::simple_deleted))
        .routes(routes!(page::simple_eperm))
        .routes(routes!(page::simple_nonexistent))
        .routes(routes!(page::complex_created))
        .routes(routes!(page::complex_updated))
        .routes(routes!(page::complex_deleted))
        .routes(routes!(page::complex_eperm))
        .routes(routes!(page::complex_nonexistent))
        // simple
        .routes(routes!(store::list_stores))
        .routes(routes!(store::get_stores_page))
        .routes(routes!(store::get_store))
        .routes(routes!(store::create_store_form, store::create_store))
        .routes(routes!(store::update_store_form, store::update_store))
        .routes(routes!(store::delete_store_form, store::delete_store))
        .routes(routes!(widget::list_widgets))
        .routes(routes!(widget::get_widgets_page))
        .routes(routes!(widget::get_widget))
        .routes(routes!(widget::get_widget_aggregate))
        .routes(routes!(widget::create_widget_form, widget::create_widget))
        .routes(routes!(widget::update_widget_form, widget::update_widget))
        .routes(routes!(widget::delete_widget_form, widget::delete_widget))
        .routes(routes!(inventory::list_inventories))
        .routes(routes!(inventory::get_inventories_page))
        .routes(routes!(inventory::get_inventory))
        .routes(routes!(inventory::get_inventory_aggregate))
        .routes(routes!(inventory::create_inventory_form, inventory::create_inventory))
        .routes(routes!(inventory::update_inventory_form, inventory::update_inventory))
        .routes(routes!(inventory::delete_inventory_form, inventory::delete_inventory))
        // complex
        .routes(routes!(sensor::list_sensors))
        .routes(routes!(sensor::get_sensors_page))
        .routes(routes!(sensor::get_sensor))
        .routes(routes!(sensor::create_sensor_form, sensor::create_sensor))
        .routes(routes!(sensor::update_sensor_form, sensor::update_sensor))
        .routes(routes!(sensor::delete_sensor_form, sensor::delete_sensor))
        .routes(routes!(event::list_events))
        .routes(routes!(event::get_events_page))
        .routes(routes!(event::get_event))
        .routes(routes!(event::create_event_form, event::create_event))
        .routes(routes!(event::update_event_form, event::update_event))
        .routes(routes!(event::delete_event_form, event::delete_event))
        .routes(routes!(device::list_devices))
        .routes(routes!(device::get_devices_page))
        .routes(routes!(device::get_device))
        .routes(routes!(device::create_device_form, device::create_device))
        .routes(routes!(device::update_device_form, device::update_device))
        .routes(routes!(device::delete_device_form, device::delete_device))
        .routes(routes!(meter::list_meters))
        .routes(routes!(meter::get_meters_page))
        .routes(routes!(meter::get_meter))
        .routes(routes!(meter::create_meter_form, meter::create_meter))
        .routes(routes!(meter::update_meter_form, meter::update_meter))
        .routes(routes!(meter::delete_meter_form, meter::delete_meter))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
