//! Rendering-free projection of the shopping list.
//!
//! The UI shows each item as a row with two buttons. This module derives
//! those rows and their labels from the item collection so tests can assert
//! exactly what a user would see without any rendering layer.

use crate::models::Item;

/// Label on the cart button while the item is out of the cart.
pub const ADD_TO_CART: &str = "Add to Cart";
/// Label on the cart button once the item is in the cart.
pub const REMOVE_FROM_CART: &str = "Remove From Cart";
/// Label on the delete button. Every row has one.
pub const DELETE: &str = "Delete";

/// The cart button label for a given cart state.
pub fn cart_label(in_cart: bool) -> &'static str {
    if in_cart {
        REMOVE_FROM_CART
    } else {
        ADD_TO_CART
    }
}

/// One rendered row of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: String,
    pub name: String,
    pub category: String,
    /// "Add to Cart" or "Remove From Cart" depending on the item
    pub cart_label: &'static str,
    pub delete_label: &'static str,
}

impl ItemRow {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            cart_label: cart_label(item.is_in_cart),
            delete_label: DELETE,
        }
    }
}

/// The full list as the user would see it, rows in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListViewState {
    rows: Vec<ItemRow>,
}

impl ListViewState {
    /// Project a view from the items, preserving their order.
    pub fn from_items(items: &[Item]) -> Self {
        Self {
            rows: items.iter().map(ItemRow::from_item).collect(),
        }
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Item names in display order.
    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.name.as_str()).collect()
    }

    /// Whether an item with this name is displayed.
    pub fn contains_name(&self, name: &str) -> bool {
        self.rows.iter().any(|row| row.name == name)
    }

    /// How many displayed items belong to a category.
    pub fn count_in_category(&self, category: &str) -> usize {
        self.rows.iter().filter(|row| row.category == category).count()
    }

    /// How many buttons across all rows carry this label.
    pub fn count_with_label(&self, label: &str) -> usize {
        self.rows
            .iter()
            .filter(|row| row.cart_label == label || row.delete_label == label)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new("item-1", "Yogurt", "Dairy"),
            Item::new("item-2", "Pomegranate", "Fruit"),
            Item::new("item-3", "Lettuce", "Vegetable"),
        ]
    }

    #[test]
    fn test_cart_label() {
        assert_eq!(cart_label(false), ADD_TO_CART);
        assert_eq!(cart_label(true), REMOVE_FROM_CART);
    }

    #[test]
    fn test_item_row_out_of_cart() {
        let item = Item::new("item-1", "Yogurt", "Dairy");
        let row = ItemRow::from_item(&item);

        assert_eq!(row.name, "Yogurt");
        assert_eq!(row.category, "Dairy");
        assert_eq!(row.cart_label, ADD_TO_CART);
        assert_eq!(row.delete_label, DELETE);
    }

    #[test]
    fn test_item_row_in_cart() {
        let mut item = Item::new("item-1", "Yogurt", "Dairy");
        item.is_in_cart = true;

        let row = ItemRow::from_item(&item);
        assert_eq!(row.cart_label, REMOVE_FROM_CART);
    }

    #[test]
    fn test_from_items_preserves_order() {
        let view = ListViewState::from_items(&sample_items());
        assert_eq!(view.names(), vec!["Yogurt", "Pomegranate", "Lettuce"]);
    }

    #[test]
    fn test_empty_view() {
        let view = ListViewState::from_items(&[]);
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
        assert!(!view.contains_name("Yogurt"));
    }

    #[test]
    fn test_contains_name() {
        let view = ListViewState::from_items(&sample_items());
        assert!(view.contains_name("Pomegranate"));
        assert!(!view.contains_name("Ice Cream"));
    }

    #[test]
    fn test_count_in_category() {
        let mut items = sample_items();
        items.push(Item::new("item-4", "Milk", "Dairy"));

        let view = ListViewState::from_items(&items);
        assert_eq!(view.count_in_category("Dairy"), 2);
        assert_eq!(view.count_in_category("Fruit"), 1);
        assert_eq!(view.count_in_category("Dessert"), 0);
    }

    #[test]
    fn test_count_with_label_all_out_of_cart() {
        let view = ListViewState::from_items(&sample_items());

        assert_eq!(view.count_with_label(ADD_TO_CART), 3);
        assert_eq!(view.count_with_label(REMOVE_FROM_CART), 0);
        assert_eq!(view.count_with_label(DELETE), 3);
    }

    #[test]
    fn test_count_with_label_mixed_cart_state() {
        let mut items = sample_items();
        items[0].is_in_cart = true;

        let view = ListViewState::from_items(&items);
        assert_eq!(view.count_with_label(ADD_TO_CART), 2);
        assert_eq!(view.count_with_label(REMOVE_FROM_CART), 1);
    }
}
