//! Response projections, one fixed shape per endpoint, and the parsed
//! create payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use models::restaurant_pizza::Price;
use models::{pizza, restaurant, restaurant_pizza};

use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl From<restaurant::Model> for RestaurantSummary {
    fn from(m: restaurant::Model) -> Self {
        Self { id: m.id, name: m.name, address: m.address }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PizzaSummary {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

impl From<pizza::Model> for PizzaSummary {
    fn from(m: pizza::Model) -> Self {
        Self { id: m.id, name: m.name, ingredients: m.ingredients }
    }
}

/// A join row as nested under its restaurant; no back-reference.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantPizzaEntry {
    pub id: i32,
    #[schema(value_type = f64)]
    pub price: Price,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaSummary,
}

impl RestaurantPizzaEntry {
    pub fn from_models(rp: restaurant_pizza::Model, pizza: pizza::Model) -> Result<Self, ServiceError> {
        Ok(Self {
            id: rp.id,
            price: Price::new(rp.price)?,
            pizza_id: rp.pizza_id,
            restaurant_id: rp.restaurant_id,
            pizza: pizza.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantDetail {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaEntry>,
}

/// Body of a successful `POST /restaurant_pizzas`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantPizzaCreated {
    pub id: i32,
    #[schema(value_type = f64)]
    pub price: Price,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaSummary,
    pub restaurant: RestaurantSummary,
}

impl RestaurantPizzaCreated {
    pub fn from_models(
        rp: restaurant_pizza::Model,
        pizza: pizza::Model,
        restaurant: restaurant::Model,
    ) -> Result<Self, ServiceError> {
        Ok(Self {
            id: rp.id,
            price: Price::new(rp.price)?,
            pizza_id: rp.pizza_id,
            restaurant_id: rp.restaurant_id,
            pizza: pizza.into(),
            restaurant: restaurant.into(),
        })
    }
}

/// Documented request shape. The handler parses the raw JSON with
/// [`NewRestaurantPizza::from_json`] so that every malformed body gets the
/// same rejection.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    pub price: f64,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

/// A create payload that passed the shape and range checks. The ids are not
/// yet known to exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewRestaurantPizza {
    pub price: Price,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

impl NewRestaurantPizza {
    pub fn from_json(body: &Value) -> Result<Self, ServiceError> {
        let obj = body
            .as_object()
            .ok_or_else(|| ServiceError::Validation("body must be a JSON object".into()))?;
        let price = required(obj, "price")?;
        let pizza_id = required(obj, "pizza_id")?;
        let restaurant_id = required(obj, "restaurant_id")?;

        let price = price
            .as_f64()
            .ok_or_else(|| ServiceError::Validation("price must be a number".into()))?;
        let price = Price::new(price)?;

        Ok(Self { price, pizza_id: parse_id("pizza_id", pizza_id)?, restaurant_id: parse_id("restaurant_id", restaurant_id)? })
    }
}

/// Absent and `null` are the same failure.
fn required<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a Value, ServiceError> {
    obj.get(key)
        .filter(|v| !v.is_null())
        .ok_or_else(|| ServiceError::Validation(format!("{} is required", key)))
}

fn parse_id(key: &str, v: &Value) -> Result<i32, ServiceError> {
    v.as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| ServiceError::Validation(format!("{} must be an integer", key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rejects(body: Value) -> bool {
        matches!(NewRestaurantPizza::from_json(&body), Err(e) if e.is_validation())
    }

    #[test]
    fn parses_valid_payload() {
        let parsed = NewRestaurantPizza::from_json(&json!({"price": 15, "pizza_id": 1, "restaurant_id": 3})).unwrap();
        assert_eq!(parsed.price.value(), 15.0);
        assert_eq!(parsed.pizza_id, 1);
        assert_eq!(parsed.restaurant_id, 3);

        let parsed = NewRestaurantPizza::from_json(&json!({"price": 12.5, "pizza_id": 2, "restaurant_id": 2})).unwrap();
        assert_eq!(parsed.price.value(), 12.5);
    }

    #[test]
    fn rejects_non_objects() {
        assert!(rejects(json!(null)));
        assert!(rejects(json!([1, 2, 3])));
        assert!(rejects(json!("price")));
    }

    #[test]
    fn rejects_missing_or_null_fields() {
        assert!(rejects(json!({"price": 5, "restaurant_id": 1})));
        assert!(rejects(json!({"pizza_id": 1, "restaurant_id": 1})));
        assert!(rejects(json!({"price": 5, "pizza_id": null, "restaurant_id": 1})));
        assert!(rejects(json!({})));
    }

    #[test]
    fn rejects_bad_price() {
        assert!(rejects(json!({"price": 0, "pizza_id": 1, "restaurant_id": 1})));
        assert!(rejects(json!({"price": 31, "pizza_id": 1, "restaurant_id": 1})));
        assert!(rejects(json!({"price": "abc", "pizza_id": 1, "restaurant_id": 1})));
        assert!(rejects(json!({"price": "10", "pizza_id": 1, "restaurant_id": 1})));
        assert!(rejects(json!({"price": true, "pizza_id": 1, "restaurant_id": 1})));
    }

    #[test]
    fn price_bounds_are_accepted() {
        assert!(NewRestaurantPizza::from_json(&json!({"price": 1, "pizza_id": 1, "restaurant_id": 1})).is_ok());
        assert!(NewRestaurantPizza::from_json(&json!({"price": 30, "pizza_id": 1, "restaurant_id": 1})).is_ok());
    }

    #[test]
    fn rejects_non_integer_ids() {
        assert!(rejects(json!({"price": 5, "pizza_id": "1", "restaurant_id": 1})));
        assert!(rejects(json!({"price": 5, "pizza_id": 1.5, "restaurant_id": 1})));
        assert!(rejects(json!({"price": 5, "pizza_id": 1, "restaurant_id": 4294967296u64})));
    }

    #[test]
    fn nested_projections_carry_no_collections() {
        let created = RestaurantPizzaCreated {
            id: 7,
            price: Price::new(15.0).unwrap(),
            pizza_id: 1,
            restaurant_id: 3,
            pizza: PizzaSummary { id: 1, name: "Emma".into(), ingredients: "Dough, Tomato Sauce, Cheese".into() },
            restaurant: RestaurantSummary { id: 3, name: "Kiki's Pizza".into(), address: "address3".into() },
        };
        let v = serde_json::to_value(&created).unwrap();
        assert_eq!(v["price"], json!(15));
        assert!(v["pizza"].get("restaurant_pizzas").is_none());
        assert!(v["restaurant"].get("restaurant_pizzas").is_none());
        assert!(v["restaurant"].get("address").is_some());
    }
}
