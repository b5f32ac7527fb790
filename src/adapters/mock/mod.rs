//! Mock implementations for testing.
//!
//! These enable unit testing the provider and the application without
//! network access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`ScriptedPhotoSource`] - photo source answering from a per-page script

pub mod http;
pub mod photos;

pub use http::{MockHttpClient, MockResponse};
pub use photos::ScriptedPhotoSource;
