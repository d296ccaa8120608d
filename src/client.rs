//! Shopping-list API client for backend communication.
//!
//! This module provides the HTTP client for the shopping-list backend. All
//! requests go through the [`HttpClient`] trait, so tests can swap the real
//! transport for the in-process [`MockBackend`](crate::adapters::MockBackend).

use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::models::{Item, NewItem};
use crate::traits::{Headers, HttpClient, HttpError, Response};

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Error type for shopping-list client operations
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure
    Transport(HttpError),
    /// JSON serialization or deserialization failed
    Json(serde_json::Error),
    /// The backend has no item with this id
    NotFound { id: String },
    /// Server returned an error status
    ServerError { status: u16, message: String },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "Transport error: {}", e),
            ApiError::Json(e) => write!(f, "JSON error: {}", e),
            ApiError::NotFound { id } => write!(f, "No item found with id: {}", id),
            ApiError::ServerError { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            ApiError::Json(e) => Some(e),
            ApiError::NotFound { .. } => None,
            ApiError::ServerError { .. } => None,
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        ApiError::Transport(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Json(e)
    }
}

/// Client for the shopping-list backend API.
///
/// Provides methods for listing, creating, toggling and deleting items.
#[derive(Clone)]
pub struct ShoppingListClient {
    /// Base URL for the shopping-list API
    pub base_url: String,
    /// Transport used for every request
    http: Arc<dyn HttpClient>,
}

impl ShoppingListClient {
    /// Create a new ShoppingListClient with the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a new ShoppingListClient with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            http: Arc::new(ReqwestHttpClient::new()),
        }
    }

    /// Create a client over an injected transport.
    ///
    /// This is how tests route requests to the in-process mock backend
    /// instead of a real server.
    pub fn with_transport(base_url: String, http: Arc<dyn HttpClient>) -> Self {
        Self { base_url, http }
    }

    /// Fetch all items.
    ///
    /// Sends a GET request to `/items`.
    pub async fn fetch_items(&self) -> Result<Vec<Item>, ApiError> {
        let url = format!("{}/items", self.base_url);

        let response = self.http.get(&url, &Headers::new()).await?;
        if !response.is_success() {
            return Err(error_for(&response, None));
        }

        Ok(response.json()?)
    }

    /// Create an item from the add-item form fields.
    ///
    /// Sends a POST request to `/items` and returns the created item,
    /// id assigned by the backend.
    pub async fn create_item(&self, new_item: &NewItem) -> Result<Item, ApiError> {
        let url = format!("{}/items", self.base_url);
        let body = serde_json::to_string(new_item)?;

        let response = self.http.post(&url, &body, &json_headers()).await?;
        if !response.is_success() {
            return Err(error_for(&response, None));
        }

        Ok(response.json()?)
    }

    /// Flip an item's cart flag.
    ///
    /// Sends a PATCH request to `/items/{id}` and returns the updated item.
    pub async fn toggle_cart(&self, id: &str) -> Result<Item, ApiError> {
        let url = format!("{}/items/{}", self.base_url, id);

        let response = self.http.patch(&url, "", &Headers::new()).await?;
        if !response.is_success() {
            return Err(error_for(&response, Some(id)));
        }

        Ok(response.json()?)
    }

    /// Delete an item.
    ///
    /// Sends a DELETE request to `/items/{id}`. The backend answers 204
    /// with no body.
    pub async fn delete_item(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/items/{}", self.base_url, id);

        let response = self.http.delete(&url, &Headers::new()).await?;
        if !response.is_success() {
            return Err(error_for(&response, Some(id)));
        }

        Ok(())
    }
}

impl Default for ShoppingListClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ShoppingListClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShoppingListClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn json_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers
}

/// Map an error response to an ApiError.
///
/// A 404 on a known id becomes [`ApiError::NotFound`]; everything else
/// keeps its status and the backend's error message.
fn error_for(response: &Response, id: Option<&str>) -> ApiError {
    if response.status == 404 {
        if let Some(id) = id {
            return ApiError::NotFound { id: id.to_string() };
        }
    }

    ApiError::ServerError {
        status: response.status,
        message: extract_error_message(response),
    }
}

/// Pull the message out of a `{"error": "..."}` body, falling back to the
/// raw body text.
fn extract_error_message(response: &Response) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    if let Ok(body) = response.json::<ErrorBody>() {
        return body.error;
    }

    let text = response.text();
    if text.is_empty() {
        "Unknown error".to_string()
    } else {
        text
    }
}
