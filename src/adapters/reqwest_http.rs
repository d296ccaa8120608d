//! Production transport backed by reqwest.
//!
//! [`ReqwestHttpClient`] is the [`HttpClient`] the shopping-list client
//! uses outside of tests. Every request follows the same path: apply the
//! caller's headers, send, buffer the body.

use async_trait::async_trait;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// [`HttpClient`] implementation over a shared `reqwest::Client`.
///
/// Cloning is cheap; clones reuse the same connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Wrap a preconfigured `reqwest::Client`, for custom timeouts or
    /// TLS settings.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// The wrapped `reqwest::Client`.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    async fn send(
        &self,
        mut builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(map_error)?;
        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.bytes().await.map_err(map_error)?;

        Ok(Response::with_headers(status, headers, body))
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.send(self.client.get(url), headers).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.send(self.client.post(url).body(body.to_string()), headers)
            .await
    }

    async fn patch(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        self.send(self.client.patch(url).body(body.to_string()), headers)
            .await
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.send(self.client.delete(url), headers).await
    }
}

/// Sort a reqwest failure into the matching [`HttpError`].
fn map_error(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout(err.to_string())
    } else if err.is_connect() {
        HttpError::ConnectionFailed(err.to_string())
    } else if err.is_builder() {
        HttpError::InvalidUrl(err.to_string())
    } else {
        HttpError::Other(err.to_string())
    }
}

/// Flatten a reqwest header map, skipping values that are not UTF-8.
fn collect_headers(map: &reqwest::header::HeaderMap) -> Headers {
    let mut headers = Headers::new();
    for (name, value) in map {
        if let Ok(value) = value.to_str() {
            headers.insert(name.to_string(), value.to_string());
        }
    }
    headers
}
