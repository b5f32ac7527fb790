//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::ScriptedPhotoSource`] - Per-page scripted photo batches

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, ScriptedPhotoSource};
pub use reqwest_http::ReqwestHttpClient;
