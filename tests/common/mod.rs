//! Common test utilities for integration tests.
//!
//! This module provides reusable fixtures and helper functions for
//! integration testing the shopping list against the mock backend.
//!
//! # Example
//!
//! ```ignore
//! use common::{mount_list, seeded_backend};
//!
//! let backend = seeded_backend();
//! let list = mount_list(&backend).await;
//! ```

pub mod mocks;

pub use mocks::*;

use std::sync::{Arc, Once};

use grocer::adapters::MockBackend;
use grocer::app::ShoppingList;
use grocer::client::ShoppingListClient;
use grocer::models::Item;

/// Base URL used by tests. The mock transport never resolves it.
pub const TEST_BASE_URL: &str = "http://shopping.test";

static TRACING: Once = Once::new();

/// Initialize tracing output for tests.
///
/// Safe to call from every test; only the first call installs the
/// subscriber. Run with `RUST_LOG=debug` to see mock backend routing.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// The items every seeded backend starts with.
#[allow(dead_code)]
pub fn grocery_seed() -> Vec<Item> {
    vec![
        Item::new("item-1", "Yogurt", "Dairy"),
        Item::new("item-2", "Pomegranate", "Fruit"),
        Item::new("item-3", "Lettuce", "Vegetable"),
    ]
}

/// A backend seeded with the default grocery items.
pub fn seeded_backend() -> MockBackend {
    init_tracing();
    MockBackend::new()
}

/// A client whose requests all go to the given backend.
pub fn test_client(backend: &MockBackend) -> ShoppingListClient {
    ShoppingListClient::with_transport(TEST_BASE_URL.to_string(), Arc::new(backend.clone()))
}

/// Mount a shopping list over the given backend.
#[allow(dead_code)]
pub async fn mount_list(backend: &MockBackend) -> ShoppingList {
    ShoppingList::mount(test_client(backend))
        .await
        .expect("mount against the mock backend")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grocery_seed_matches_backend_seed() {
        let backend = seeded_backend();
        assert_eq!(backend.items(), grocery_seed());
    }

    #[tokio::test]
    async fn test_mount_list_helper() {
        let backend = seeded_backend();
        let list = mount_list(&backend).await;
        assert_eq!(list.items().len(), 3);
    }

    #[tokio::test]
    async fn test_test_client_routes_to_backend() {
        let backend = seeded_backend();
        let client = test_client(&backend);

        let items = client.fetch_items().await.unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(backend.get_requests()[0].path, "/items");
    }
}
