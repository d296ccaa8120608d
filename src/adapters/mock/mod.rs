//! Mock implementations for testing.
//!
//! This module provides test doubles for the trait abstractions,
//! enabling unit testing without network dependencies.
//!
//! # Available Mocks
//!
//! - [`MockBackend`] - In-process shopping-list backend with request recording

pub mod http;

pub use http::{MockBackend, RecordedRequest};
