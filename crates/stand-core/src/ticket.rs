//! # Item Tickets
//!
//! Untyped item requests as they arrive from a register UI or web client.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ticket → Item                                    │
//! │                                                                         │
//! │  JSON value                                                             │
//! │     │                                                                   │
//! │     ├── no "kind" / unknown kind ──► InvalidItemType                   │
//! │     │                                                                   │
//! │     ├── body does not deserialize ─► MalformedTicket                   │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  ItemTicket::build()                                                    │
//! │     │                                                                   │
//! │     ├── unknown identifier ────────► InvalidOption                     │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  Item (Drink | Food | Dessert)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ```rust
//! use serde_json::json;
//! use stand_core::ticket::ItemTicket;
//! use stand_core::item::Orderable;
//!
//! let ticket = ItemTicket::from_value(&json!({
//!     "kind": "food",
//!     "type": "hotdog",
//!     "toppings": ["chili"]
//! })).unwrap();
//! assert_eq!(ticket.build().unwrap().total_price().cents(), 290);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::DessertFlavor;
use crate::error::{CoreError, CoreResult};
use crate::item::{Drink, Food, FrozenDessert, Item};
use crate::types::ItemKind;

/// A not-yet-validated item request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemTicket {
    Drink {
        base: String,
        size: String,
        #[serde(default)]
        flavors: Vec<String>,
    },
    Food {
        #[serde(rename = "type", alias = "food_type")]
        food_type: String,
        #[serde(default)]
        toppings: Vec<String>,
    },
    Dessert {
        flavor: String,
        #[serde(default)]
        toppings: Vec<String>,
    },
}

impl ItemTicket {
    /// Reads a ticket from a JSON value.
    pub fn from_value(value: &Value) -> CoreResult<Self> {
        let kind = match value.get("kind") {
            Some(Value::String(kind)) => kind.as_str(),
            Some(other) => return Err(CoreError::InvalidItemType(other.to_string())),
            None => return Err(CoreError::InvalidItemType(describe(value))),
        };

        if !ItemKind::ALL.iter().any(|k| k.as_str() == kind) {
            return Err(CoreError::InvalidItemType(kind.to_string()));
        }

        serde_json::from_value(value.clone()).map_err(|e| CoreError::MalformedTicket {
            kind: kind.to_string(),
            reason: e.to_string(),
        })
    }

    /// Reads a ticket from JSON text.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| CoreError::MalformedTicket {
            kind: "item".to_string(),
            reason: e.to_string(),
        })?;
        Self::from_value(&value)
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            ItemTicket::Drink { .. } => ItemKind::Drink,
            ItemTicket::Food { .. } => ItemKind::Food,
            ItemTicket::Dessert { .. } => ItemKind::Dessert,
        }
    }

    /// Validates every identifier and builds the item.
    pub fn build(&self) -> CoreResult<Item> {
        match self {
            ItemTicket::Drink { base, size, flavors } => {
                let mut drink = Drink::new(base, size)?;
                drink.set_flavors(flavors)?;
                Ok(drink.into())
            }
            ItemTicket::Food { food_type, toppings } => {
                let mut food = Food::new(food_type)?;
                for topping in toppings {
                    food.add_topping(topping)?;
                }
                Ok(food.into())
            }
            ItemTicket::Dessert { flavor, toppings } => {
                let flavor: DessertFlavor = flavor.parse()?;
                let mut dessert = FrozenDessert::new(flavor);
                for topping in toppings {
                    dessert.add_topping(topping)?;
                }
                Ok(dessert.into())
            }
        }
    }
}

/// Names the JSON type of a value that is not a ticket object.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object without kind",
    }
    .to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::item::Orderable;
    use serde_json::json;

    #[test]
    fn test_drink_ticket() {
        let ticket = ItemTicket::from_value(&json!({
            "kind": "drink",
            "base": "pokecola",
            "size": "Medium",
            "flavors": ["cherry", "lime", "cherry"]
        }))
        .unwrap();

        assert_eq!(ticket.kind(), ItemKind::Drink);
        let item = ticket.build().unwrap();
        assert_eq!(item.as_drink().unwrap().num_flavors(), 2);
        assert_eq!(item.total_price().cents(), 175 + 30);
    }

    #[test]
    fn test_dessert_ticket() {
        let item = ItemTicket::from_json_str(
            r#"{"kind":"dessert","flavor":"vanilla_bean","toppings":["caramel_sauce","cookie_dough"]}"#,
        )
        .unwrap()
        .build()
        .unwrap();

        assert_eq!(item.total_price().cents(), 450);
    }

    #[test]
    fn test_food_ticket_accepts_food_type_alias() {
        let ticket = ItemTicket::from_value(&json!({"kind": "food", "food_type": "corndog"})).unwrap();
        assert_eq!(ticket.build().unwrap().total_price().cents(), 200);
    }

    #[test]
    fn test_unknown_kind_is_invalid_item_type() {
        let err = ItemTicket::from_value(&json!({"kind": "souvenir", "name": "mug"})).unwrap_err();
        assert_eq!(err, CoreError::InvalidItemType("souvenir".to_string()));
    }

    #[test]
    fn test_non_object_is_invalid_item_type() {
        let err = ItemTicket::from_value(&json!(42)).unwrap_err();
        assert_eq!(err, CoreError::InvalidItemType("number".to_string()));

        let err = ItemTicket::from_value(&json!({"base": "water"})).unwrap_err();
        assert!(matches!(err, CoreError::InvalidItemType(_)));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let err = ItemTicket::from_value(&json!({"kind": "drink", "base": "water"})).unwrap_err();
        assert!(matches!(err, CoreError::MalformedTicket { ref kind, .. } if kind == "drink"));
    }

    #[test]
    fn test_bad_json_text_is_malformed() {
        let err = ItemTicket::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CoreError::MalformedTicket { .. }));
    }

    #[test]
    fn test_unknown_identifier_is_invalid_option() {
        let ticket = ItemTicket::Dessert {
            flavor: "rocky_road".to_string(),
            toppings: vec![],
        };
        let err = ticket.build().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidOption { category: Category::DessertFlavor, .. }
        ));
    }
}
