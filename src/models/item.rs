use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// A single shopping-list entry as the backend serves it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier assigned by the backend (string or integer on the wire)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Category used for grouping and counting
    pub category: String,
    /// Whether the item has been placed in the cart
    #[serde(rename = "isInCart", default)]
    pub is_in_cart: bool,
}

impl Item {
    /// Create an item with a known id. New items start out of the cart.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            is_in_cart: false,
        }
    }
}

/// Payload for creating an item (the add-item form body).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub category: String,
}

impl NewItem {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}
