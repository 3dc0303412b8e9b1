use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::server::{
    error::form::FormErrors,
    form::{normalize, parse_decimal, parse_integer, parse_reference, required, DecimalRules, SKU_RE},
};

/// Widget cost: up to 9999.99, never negative.
pub const COST_RULES: DecimalRules = DecimalRules {
    max_digits: 6,
    decimal_places: 2,
    min: Some(Decimal::ZERO),
    max: Some(Decimal::from_parts(999_999, 0, 0, false, 2)),
};

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct StoreForm {
    #[validate(length(max = 20))]
    pub name: Option<String>,
    #[validate(length(max = 20))]
    pub location: Option<String>,
    pub csrfmiddlewaretoken: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreInput {
    pub name: String,
    pub location: String,
}

impl StoreForm {
    /// Values offered by a blank create form
    pub fn initial() -> Self {
        Self {
            name: Some("myStore".to_string()),
            location: Some("El Cerrito".to_string()),
            csrfmiddlewaretoken: None,
        }
    }

    pub fn from_model(store: &entity::simple_store::Model) -> Self {
        Self {
            name: Some(store.name.clone()),
            location: Some(store.location.clone()),
            csrfmiddlewaretoken: None,
        }
    }

    pub fn clean(self) -> Result<StoreInput, FormErrors> {
        let form = Self {
            name: normalize(self.name),
            location: normalize(self.location),
            csrfmiddlewaretoken: None,
        };

        let mut errors = FormErrors::new();
        if let Err(e) = form.validate() {
            errors.extend_validation(e);
        }

        let name = required(&mut errors, "name", form.name);
        let location = required(&mut errors, "location", form.location);

        match (name, location) {
            (Some(name), Some(location)) if errors.is_empty() => Ok(StoreInput { name, location }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct WidgetForm {
    #[validate(length(max = 20))]
    pub name: Option<String>,
    #[validate(regex(path = *SKU_RE, message = "Enter a valid SKU in the form 123-456-78."))]
    pub sku: Option<String>,
    /// Optional, defaults to 0.00
    pub cost: Option<String>,
    pub csrfmiddlewaretoken: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetInput {
    pub name: String,
    pub sku: String,
    pub cost: Decimal,
}

impl WidgetForm {
    pub fn initial() -> Self {
        Self {
            name: Some("myWidget".to_string()),
            sku: Some("111-111-11".to_string()),
            cost: Some("0.00".to_string()),
            csrfmiddlewaretoken: None,
        }
    }

    pub fn from_model(widget: &entity::simple_widget::Model) -> Self {
        let mut cost = widget.cost;
        cost.rescale(COST_RULES.decimal_places);

        Self {
            name: Some(widget.name.clone()),
            sku: Some(widget.sku.clone()),
            cost: Some(cost.to_string()),
            csrfmiddlewaretoken: None,
        }
    }

    pub fn clean(self) -> Result<WidgetInput, FormErrors> {
        let form = Self {
            name: normalize(self.name),
            sku: normalize(self.sku),
            cost: normalize(self.cost),
            csrfmiddlewaretoken: None,
        };

        let mut errors = FormErrors::new();
        if let Err(e) = form.validate() {
            errors.extend_validation(e);
        }

        let name = required(&mut errors, "name", form.name);
        let sku = required(&mut errors, "sku", form.sku);
        let cost = match form.cost.as_deref() {
            Some(cost) => parse_decimal(&mut errors, "cost", cost, COST_RULES),
            None => Some(Decimal::new(0, 2)),
        };

        match (name, sku, cost) {
            (Some(name), Some(sku), Some(cost)) if errors.is_empty() => {
                Ok(WidgetInput { name, sku, cost })
            }
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct InventoryForm {
    /// Id of one of the user's stores
    pub store: Option<String>,
    /// Id of one of the user's widgets
    pub widget: Option<String>,
    pub quantity: Option<String>,
    pub csrfmiddlewaretoken: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct InventoryInput {
    pub store_id: i32,
    pub widget_id: i32,
    #[validate(range(min = 0))]
    pub quantity: i32,
}

impl InventoryForm {
    pub fn initial() -> Self {
        Self {
            quantity: Some("1".to_string()),
            ..Default::default()
        }
    }

    pub fn from_model(inventory: &entity::simple_inventory::Model) -> Self {
        Self {
            store: Some(inventory.store_id.to_string()),
            widget: Some(inventory.widget_id.to_string()),
            quantity: Some(inventory.quantity.to_string()),
            csrfmiddlewaretoken: None,
        }
    }

    pub fn clean(self) -> Result<InventoryInput, FormErrors> {
        let mut errors = FormErrors::new();

        let store = required(&mut errors, "store", normalize(self.store))
            .and_then(|v| parse_reference(&mut errors, "store", &v));
        let widget = required(&mut errors, "widget", normalize(self.widget))
            .and_then(|v| parse_reference(&mut errors, "widget", &v));
        let quantity = required(&mut errors, "quantity", normalize(self.quantity))
            .and_then(|v| parse_integer(&mut errors, "quantity", &v));

        let (Some(store_id), Some(widget_id), Some(quantity)) = (store, widget, quantity) else {
            return Err(errors);
        };

        let input = InventoryInput {
            store_id,
            widget_id,
            quantity,
        };
        if let Err(e) = input.validate() {
            errors.extend_validation(e);
        }

        errors.into_result().map(|()| input)
    }
}
