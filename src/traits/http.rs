//! Transport seam between the shopping-list client and a backend.
//!
//! [`HttpClient`] covers the four verbs the shopping-list API uses. The
//! production implementation wraps reqwest; tests swap in the in-process
//! mock backend so a suite never opens a socket.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// A buffered HTTP response.
///
/// Bodies on this API are small JSON documents, so the whole body is held
/// in memory and parsed with [`Response::json`].
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a response without headers.
    pub fn new(status: u16, body: Bytes) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body,
        }
    }

    /// Create a response with headers.
    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body as text. Invalid UTF-8 is replaced, never an error.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Failures below the HTTP layer.
///
/// A response with an error status is not an `HttpError`; it comes back
/// as a normal [`Response`] for the caller to map.
#[derive(Debug, Clone)]
pub enum HttpError {
    /// Could not connect to the backend
    ConnectionFailed(String),
    /// The request ran out of time
    Timeout(String),
    /// The URL did not parse
    InvalidUrl(String),
    /// Anything else the transport reports
    Other(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            HttpError::Timeout(msg) => write!(f, "Request timed out: {}", msg),
            HttpError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            HttpError::Other(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// The four verbs of the shopping-list API.
///
/// `GET` and `DELETE` carry no body; `POST` and `PATCH` take one as a
/// string, JSON-encoded by the caller.
///
/// # Example
///
/// ```ignore
/// use grocer::models::Item;
/// use grocer::traits::{Headers, HttpClient, HttpError};
///
/// async fn in_cart_count(client: &dyn HttpClient) -> Result<usize, HttpError> {
///     let response = client.get("http://localhost:4000/items", &Headers::new()).await?;
///     let items: Vec<Item> = response
///         .json()
///         .map_err(|e| HttpError::Other(e.to_string()))?;
///     Ok(items.iter().filter(|item| item.is_in_cart).count())
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a GET request.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;

    /// Send a POST request with a string body.
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError>;

    /// Send a PATCH request with a string body.
    async fn patch(&self, url: &str, body: &str, headers: &Headers)
        -> Result<Response, HttpError>;

    /// Send a DELETE request.
    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}
