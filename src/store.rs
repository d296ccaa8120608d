use thiserror::Error;
use uuid::Uuid;

use crate::models::Item;

/// Error type for item store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No item with the given id exists
    #[error("No item found with id: {id}")]
    NotFound { id: String },
}

/// In-memory collection of shopping-list items
/// Backs the mock backend during tests and seeds every reset
#[derive(Debug, Clone)]
pub struct ItemStore {
    /// Current items in insertion order
    items: Vec<Item>,
    /// Seed restored verbatim by [`ItemStore::reset`]
    seed: Vec<Item>,
}

impl ItemStore {
    /// Create a store seeded with the default grocery items.
    pub fn new() -> Self {
        Self::with_seed(default_seed())
    }

    /// Create a store with a custom seed.
    ///
    /// The seed is what [`ItemStore::reset`] restores, ids included,
    /// so seed items should carry stable ids.
    pub fn with_seed(seed: Vec<Item>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<&str> = seed.iter().map(|i| i.id.as_str()).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "seed ids must be unique"
        );

        Self {
            items: seed.clone(),
            seed,
        }
    }

    /// Discard all changes and restore the seed items.
    pub fn reset(&mut self) {
        self.items = self.seed.clone();
    }

    /// Get all items in insertion order.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// Get an item by id.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Add a new item with a generated id. New items start out of the cart
    /// and are appended after all existing items.
    pub fn add(&mut self, name: impl Into<String>, category: impl Into<String>) -> Item {
        let item = Item::new(Uuid::new_v4().to_string(), name, category);
        self.items.push(item.clone());
        item
    }

    /// Flip the cart flag of the item with the given id.
    ///
    /// The item keeps its position in the list. Returns the updated item.
    pub fn toggle_cart(&mut self, id: &str) -> Result<Item, StoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        item.is_in_cart = !item.is_in_cart;
        Ok(item.clone())
    }

    /// Remove the item with the given id, preserving the order of the rest.
    ///
    /// Returns the removed item.
    pub fn remove(&mut self, id: &str) -> Result<Item, StoreError> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        Ok(self.items.remove(pos))
    }

    /// Get the number of items currently in the store.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the store has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The grocery items every fresh store starts with.
///
/// Ids are fixed so a reset restores an identical collection.
fn default_seed() -> Vec<Item> {
    vec![
        Item::new("item-1", "Yogurt", "Dairy"),
        Item::new("item-2", "Pomegranate", "Fruit"),
        Item::new("item-3", "Lettuce", "Vegetable"),
    ]
}
