//! Trait abstractions for dependency injection and testability.
//!
//! This module provides trait-based abstractions for core functionality,
//! enabling dependency injection, mocking, and better testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PATCH, DELETE)

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
