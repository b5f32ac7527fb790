//! Error handling for marsdeck.
//!
//! - **Error Categories**: High-level classification for handling decisions
//! - **Domain-specific Errors**: photo fetches and per-card image loads
//! - **Unified Error Type**: `DeckError` consolidates all error types
//! - **Result Type Alias**: `DeckResult<T>` for consistent return types
//!
//! # Propagation
//!
//! | Error | Where it ends up | Retryable |
//! |-------|------------------|-----------|
//! | `FetchError::Network` / `Timeout` | deck empty state | Yes (by policy) |
//! | `FetchError::HttpStatus` 5xx/429/408 | deck empty state | Yes (by policy) |
//! | `FetchError::HttpStatus` other | deck empty state | No |
//! | `FetchError::Parse` | deck empty state | No |
//! | `ImageLoadError` | inline card placeholder only | No |
//!
//! Nothing is ever raised across the gesture/animation boundary.

mod category;
mod deck_error;
mod fetch;
mod image;

pub use category::ErrorCategory;
pub use deck_error::{DeckError, DeckResult};
pub use fetch::FetchError;
pub use image::ImageLoadError;
