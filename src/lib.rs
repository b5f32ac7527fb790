//! Marsdeck - a swipeable terminal deck of Mars rover photos
//!
//! The library holds the headless swipe engine ([`deck`]), the application
//! state container ([`state`]), the photo provider ([`provider`]) and the
//! terminal surface ([`app`], [`ui`]). It is exposed for the binary and for
//! integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod deck;
pub mod error;
pub mod logging;
pub mod models;
pub mod provider;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
