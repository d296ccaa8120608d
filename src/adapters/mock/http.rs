//! In-process mock backend for testing.
//!
//! Emulates the shopping-list JSON API over the [`HttpClient`] trait so
//! tests exercise real request and response handling without a server.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tracing::debug;

use crate::models::{Item, NewItem};
use crate::store::ItemStore;
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET, POST, PATCH or DELETE)
    pub method: String,
    /// Request path with scheme, host and query string stripped
    pub path: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST and PATCH requests)
    pub body: Option<String>,
    /// When the backend received the request
    pub received_at: DateTime<Utc>,
}

/// Mock shopping-list backend for testing.
///
/// Owns an [`ItemStore`] and answers the same routes as the real backend:
///
/// - `GET /items` returns all items
/// - `POST /items` creates an item from a JSON body
/// - `PATCH /items/:id` toggles the item's cart flag
/// - `DELETE /items/:id` removes the item
///
/// Unknown routes and unknown ids return a 404 with a JSON error body.
/// The backend itself never fails at the transport level, so tests that
/// need connection errors should use a different [`HttpClient`] double.
///
/// # Example
///
/// ```ignore
/// use grocer::adapters::mock::MockBackend;
/// use grocer::traits::{Headers, HttpClient};
///
/// let backend = MockBackend::new();
///
/// let response = backend.get("http://localhost:4000/items", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
///
/// // Verify the request was made
/// let requests = backend.get_requests();
/// assert_eq!(requests[0].path, "/items");
/// ```
#[derive(Debug, Clone)]
pub struct MockBackend {
    /// Item collection answered by every route
    store: Arc<Mutex<ItemStore>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    /// Create a backend seeded with the default grocery items.
    pub fn new() -> Self {
        Self::with_store(ItemStore::new())
    }

    /// Create a backend over a custom store.
    pub fn with_store(store: ItemStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Restore the store to its seed and drop all recorded requests.
    ///
    /// Call between tests so one test's changes never leak into the next.
    pub fn reset(&self) {
        self.store.lock().unwrap().reset();
        self.requests.lock().unwrap().clear();
    }

    /// Snapshot of the items currently in the store.
    pub fn items(&self) -> Vec<Item> {
        self.store.lock().unwrap().list().to_vec()
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    /// Record a request.
    fn record_request(&self, method: &str, path: &str, headers: &Headers, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            path: path.to_string(),
            headers: headers.clone(),
            body,
            received_at: Utc::now(),
        });
    }

    /// Route a request to the matching handler.
    fn dispatch(&self, method: &str, url: &str, headers: &Headers, body: Option<&str>) -> Response {
        let path = request_path(url);
        self.record_request(method, &path, headers, body.map(|b| b.to_string()));
        debug!("Mock backend request: {} {}", method, path);

        match (method, path.as_str()) {
            ("GET", "/items") => self.list_items(),
            ("POST", "/items") => self.create_item(body),
            _ => match (method, item_id(&path)) {
                ("PATCH", Some(id)) => self.toggle_item(id),
                ("DELETE", Some(id)) => self.delete_item(id),
                _ => error_response(404, &format!("No handler for {} {}", method, path)),
            },
        }
    }

    fn list_items(&self) -> Response {
        let store = self.store.lock().unwrap();
        json_response(200, store.list())
    }

    fn create_item(&self, body: Option<&str>) -> Response {
        let payload: NewItem = match body.map(serde_json::from_str).transpose() {
            Ok(Some(payload)) => payload,
            Ok(None) => return error_response(400, "Missing request body"),
            Err(err) => return error_response(400, &format!("Invalid item payload: {}", err)),
        };

        let item = self.store.lock().unwrap().add(payload.name, payload.category);
        json_response(201, &item)
    }

    fn toggle_item(&self, id: &str) -> Response {
        match self.store.lock().unwrap().toggle_cart(id) {
            Ok(item) => json_response(200, &item),
            Err(err) => error_response(404, &err.to_string()),
        }
    }

    fn delete_item(&self, id: &str) -> Response {
        match self.store.lock().unwrap().remove(id) {
            Ok(_) => Response::new(204, Bytes::new()),
            Err(err) => error_response(404, &err.to_string()),
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockBackend {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        Ok(self.dispatch("GET", url, headers, None))
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        Ok(self.dispatch("POST", url, headers, Some(body)))
    }

    async fn patch(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        Ok(self.dispatch("PATCH", url, headers, Some(body)))
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        Ok(self.dispatch("DELETE", url, headers, None))
    }
}

/// Strip scheme, host and query string so routing sees only the path.
fn request_path(url: &str) -> String {
    let after_scheme = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };

    let path = match after_scheme.find('/') {
        Some(idx) => &after_scheme[idx..],
        None => "/",
    };

    match path.find('?') {
        Some(idx) => path[..idx].to_string(),
        None => path.to_string(),
    }
}

/// Extract the id from an `/items/:id` path. Deeper paths do not match.
fn item_id(path: &str) -> Option<&str> {
    path.strip_prefix("/items/")
        .filter(|id| !id.is_empty() && !id.contains('/'))
}

fn json_response<T: Serialize + ?Sized>(status: u16, value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => {
            let mut headers = Headers::new();
            headers.insert("content-type".to_string(), "application/json".to_string());
            Response::with_headers(status, headers, Bytes::from(body))
        }
        Err(err) => error_response(500, &format!("Failed to serialize response: {}", err)),
    }
}

fn error_response(status: u16, message: &str) -> Response {
    let body = serde_json::to_vec(&json!({ "error": message })).unwrap_or_default();
    let mut headers = Headers::new();
    headers.insert("content-type".to_string(), "application/json".to_string());
    Response::with_headers(status, headers, Bytes::from(body))
}
