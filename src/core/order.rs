//! Order domain model and the shared request-payload validator
//!
//! All wire names are camelCase (`imageSource`), matching the JSON contract
//! the API's clients already speak.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::{OrderError, OrderResult};

/// A dish on an order
///
/// Prices are in currency minor units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dish {
    pub id: String,
    pub category: String,
    pub cuisine: String,
    pub description: String,
    pub image_source: String,
    pub name: String,
    pub price: i64,
}

/// A drink on an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Drink {
    pub id: String,
    pub brewer: String,
    pub category: String,
    pub description: String,
    pub image_source: String,
    pub name: String,
    pub price: i64,
}

/// A stored order
///
/// `id` is assigned by the store on creation and is unique within it. The
/// email acts as a secondary key: the store keeps at most one order per
/// distinct email, enforced by upsert replacement rather than rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub email: String,
    pub dish: Dish,
    #[serde(default)]
    pub drinks: Vec<Drink>,
    #[serde(default)]
    pub count: u32,
    pub date: DateTime<Utc>,
}

/// An Order-shaped request body
///
/// Both write endpoints (create-order and update-order) accept the same
/// shape and share one validation rule: the body must carry a string
/// `email` and an object `dish`. Everything else is optional and defaults
/// when absent. Any `id` in the body is ignored on the create path (ids
/// are store-assigned there) but stored as given on the replace path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    #[serde(default)]
    pub id: Option<u64>,
    pub email: String,
    pub dish: Dish,
    #[serde(default)]
    pub drinks: Vec<Drink>,
    #[serde(default)]
    pub count: u32,
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
}

impl OrderPayload {
    /// Validate a raw JSON body as a well-formed order payload
    ///
    /// A body missing `email` (as a string) or `dish` (as an object) fails
    /// with [`OrderError::InvalidPayload`].
    pub fn from_value(body: serde_json::Value) -> OrderResult<Self> {
        serde_json::from_value(body).map_err(|err| {
            tracing::debug!(error = %err, "rejected malformed order payload");
            OrderError::InvalidPayload
        })
    }

    /// Materialize the payload into a stored order under the given id
    pub fn into_order(self, id: u64) -> Order {
        Order {
            id,
            email: self.email,
            dish: self.dish,
            drinks: self.drinks,
            count: self.count,
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_requires_string_email() {
        let body = json!({ "dish": { "name": "Nasi lemak" } });
        assert!(OrderPayload::from_value(body).is_err());

        let body = json!({ "email": 42, "dish": {} });
        assert!(OrderPayload::from_value(body).is_err());
    }

    #[test]
    fn test_payload_requires_object_dish() {
        let body = json!({ "email": "a@x.com" });
        assert!(OrderPayload::from_value(body).is_err());

        let body = json!({ "email": "a@x.com", "dish": "not an object" });
        assert!(OrderPayload::from_value(body).is_err());
    }

    #[test]
    fn test_payload_defaults_optional_fields() {
        let body = json!({ "email": "a@x.com", "dish": { "name": "Nasi lemak" } });
        let payload = OrderPayload::from_value(body).unwrap();

        assert_eq!(payload.id, None);
        assert!(payload.drinks.is_empty());
        assert_eq!(payload.count, 0);
        assert_eq!(payload.dish.name, "Nasi lemak");
        assert_eq!(payload.dish.price, 0);
    }

    #[test]
    fn test_payload_accepts_full_order_shape() {
        let body = json!({
            "id": 7,
            "email": "a@x.com",
            "count": 2,
            "dish": {
                "id": "53051",
                "category": "seafood",
                "cuisine": "Malaysian",
                "description": "",
                "imageSource": "https://example.com/dish.jpg",
                "name": "Nasi lemak",
                "price": 2500
            },
            "drinks": [{
                "id": "some-uuid",
                "brewer": "vifilfell",
                "category": "beer",
                "description": "tasty beer",
                "imageSource": "https://example.com/beer.jpg",
                "name": "Gylltur",
                "price": 2500
            }]
        });
        let payload = OrderPayload::from_value(body).unwrap();

        assert_eq!(payload.id, Some(7));
        assert_eq!(payload.drinks.len(), 1);
        assert_eq!(payload.drinks[0].brewer, "vifilfell");
        assert_eq!(payload.dish.image_source, "https://example.com/dish.jpg");
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = OrderPayload::from_value(json!({
            "email": "a@x.com",
            "dish": { "imageSource": "https://example.com/dish.jpg" }
        }))
        .unwrap()
        .into_order(3);

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["dish"]["imageSource"], "https://example.com/dish.jpg");
        assert!(value["dish"].get("image_source").is_none());
    }
}
