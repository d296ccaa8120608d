//! Grocer - a shopping list client with a swappable backend
//!
//! The real backend is reached through [`adapters::ReqwestHttpClient`];
//! tests plug in [`adapters::MockBackend`], an in-process emulation of the
//! same JSON API backed by [`store::ItemStore`].

pub mod adapters;
pub mod app;
pub mod client;
pub mod models;
pub mod store;
pub mod traits;
pub mod view_state;

pub use app::ShoppingList;
pub use client::{ApiError, ShoppingListClient, DEFAULT_BASE_URL};
pub use models::{Item, NewItem};
pub use store::{ItemStore, StoreError};
