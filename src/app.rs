//! Shopping list screen state and actions.
//!
//! [`ShoppingList`] holds the items a user currently sees and drives every
//! change through the backend first, mirroring how the component behaves:
//! mount fetches, the form posts, the row buttons patch and delete, and the
//! local list only changes once the backend has answered.

use tracing::{debug, info, warn};

use crate::client::{ApiError, ShoppingListClient};
use crate::models::{Item, NewItem};
use crate::view_state::ListViewState;

/// The shopping list as mounted in the UI.
#[derive(Debug, Clone)]
pub struct ShoppingList {
    /// Client for the backend API
    client: ShoppingListClient,
    /// Items in display order
    items: Vec<Item>,
}

impl ShoppingList {
    /// Mount the list by fetching the current items from the backend.
    ///
    /// Remounting with a client over the same backend shows whatever state
    /// the backend holds, which is how changes survive a remount.
    pub async fn mount(client: ShoppingListClient) -> Result<Self, ApiError> {
        let items = client.fetch_items().await?;
        info!("Shopping list mounted with {} items", items.len());

        Ok(Self { client, items })
    }

    /// Items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The client this list talks through.
    pub fn client(&self) -> &ShoppingListClient {
        &self.client
    }

    /// Re-fetch the items from the backend, replacing the local list.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.items = self.client.fetch_items().await?;
        debug!("Refreshed shopping list: {} items", self.items.len());
        Ok(())
    }

    /// Submit the add-item form.
    ///
    /// Creates the item on the backend and appends the created item, id
    /// included, to the end of the list.
    pub async fn submit_form(&mut self, name: &str, category: &str) -> Result<Item, ApiError> {
        let created = self
            .client
            .create_item(&NewItem::new(name, category))
            .await?;
        info!("Added item '{}' ({})", created.name, created.id);

        self.items.push(created.clone());
        Ok(created)
    }

    /// Press an item's cart button.
    ///
    /// Toggles the flag on the backend and updates the item in place, so
    /// the row keeps its position while its button label flips.
    pub async fn toggle_cart(&mut self, id: &str) -> Result<Item, ApiError> {
        let updated = self.client.toggle_cart(id).await?;
        debug!(
            "Toggled cart flag for '{}': {}",
            updated.name, updated.is_in_cart
        );

        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => *item = updated.clone(),
            None => warn!("Toggled item {} is not in the local list", id),
        }

        Ok(updated)
    }

    /// Press an item's delete button.
    ///
    /// Deletes on the backend, then drops the row. The remaining rows keep
    /// their relative order.
    pub async fn delete_item(&mut self, id: &str) -> Result<(), ApiError> {
        self.client.delete_item(id).await?;
        info!("Deleted item {}", id);

        self.items.retain(|item| item.id != id);
        Ok(())
    }

    /// The list as the user sees it.
    pub fn view(&self) -> ListViewState {
        ListViewState::from_items(&self.items)
    }
}
