//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET used for photo pages and image probes
//! - [`PhotoSource`] - the paginated photo data provider

pub mod http;
pub mod photos;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use photos::PhotoSource;
