//! Mock backend fixtures for integration tests.
//!
//! This module re-exports the mock backend from `grocer::adapters::mock`
//! and provides a builder for backends with custom seeds.

pub use grocer::adapters::mock::{MockBackend, RecordedRequest};
pub use grocer::traits::{Headers, HttpClient, Response};

use grocer::models::Item;
use grocer::store::ItemStore;

/// Builder for mock backends seeded with custom items.
///
/// Seed ids are fixed (`seed-1`, `seed-2`, ...) so a reset restores an
/// identical collection.
pub struct MockBackendConfig {
    seed: Vec<Item>,
}

impl MockBackendConfig {
    /// Creates a new configuration with an empty seed.
    pub fn new() -> Self {
        Self { seed: Vec::new() }
    }

    /// Seed an item that starts out of the cart.
    pub fn with_item(mut self, name: &str, category: &str) -> Self {
        let id = format!("seed-{}", self.seed.len() + 1);
        self.seed.push(Item::new(id, name, category));
        self
    }

    /// Seed an item that starts in the cart.
    #[allow(dead_code)]
    pub fn with_item_in_cart(mut self, name: &str, category: &str) -> Self {
        let id = format!("seed-{}", self.seed.len() + 1);
        let mut item = Item::new(id, name, category);
        item.is_in_cart = true;
        self.seed.push(item);
        self
    }

    /// Builds the configured MockBackend.
    pub fn build(self) -> MockBackend {
        MockBackend::with_store(ItemStore::with_seed(self.seed))
    }
}

impl Default for MockBackendConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_builds_empty_backend() {
        let backend = MockBackendConfig::new().build();
        assert!(backend.items().is_empty());
    }

    #[test]
    fn test_with_item_assigns_stable_ids() {
        let backend = MockBackendConfig::new()
            .with_item("Bread", "Bakery")
            .with_item("Salmon", "Fish")
            .build();

        let items = backend.items();
        assert_eq!(items[0].id, "seed-1");
        assert_eq!(items[1].id, "seed-2");
        assert!(!items[0].is_in_cart);
    }

    #[test]
    fn test_with_item_in_cart() {
        let backend = MockBackendConfig::new()
            .with_item_in_cart("Bread", "Bakery")
            .build();

        assert!(backend.items()[0].is_in_cart);
    }

    #[tokio::test]
    async fn test_built_backend_answers_routes() {
        let backend = MockBackendConfig::new().with_item("Bread", "Bakery").build();

        let response = backend
            .get("http://shopping.test/items", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        let items: Vec<grocer::models::Item> = response.json().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Bread");
    }
}
