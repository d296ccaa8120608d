//! Concrete implementations of trait abstractions.
//!
//! This module provides production-ready adapters that implement the traits
//! defined in `crate::traits`. These adapters enable dependency injection
//! and testability while maintaining the same functionality.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockBackend`] - In-process shopping-list backend

pub mod mock;
pub mod reqwest_http;

pub use mock::MockBackend;
pub use reqwest_http::ReqwestHttpClient;
