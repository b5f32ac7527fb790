//! Runtime configuration.
//!
//! Use the builder pattern to customize behavior; [`DeckConfig::from_env`]
//! layers `MARSDECK_*` environment variables over the defaults and the CLI
//! layers its flags over that.

use std::time::Duration;

use crate::deck::SpringConfig;
use crate::error::DeckError;
use crate::provider::RetryPolicy;

/// Mars Rover Photos API, Curiosity rover.
pub const DEFAULT_API_URL: &str = "https://api.nasa.gov/mars-photos/api/v1/rovers/curiosity";

/// Public demo key; heavily rate limited.
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// Martian day queried when none is configured.
pub const DEFAULT_SOL: u32 = 1000;

/// Number of overlapping cards shown at once.
pub const DEFAULT_DISPLAY_DEPTH: usize = 3;

/// Fraction of the viewport width a drag must exceed to commit.
pub const DEFAULT_THRESHOLD_RATIO: f64 = 0.3;

/// Configuration for the deck, the provider and the event loop.
///
/// # Example
///
/// ```ignore
/// use marsdeck::config::DeckConfig;
///
/// let config = DeckConfig::default()
///     .with_start_page(2)
///     .with_api_key("my-key");
/// ```
#[derive(Debug, Clone)]
pub struct DeckConfig {
    /// Base URL; pages are fetched from `{api_base_url}/photos?page={n}`
    pub api_base_url: String,
    /// Sent as `api_key`; omitted when `None`
    pub api_key: Option<String>,
    /// Sent as `sol`; omitted when `None`
    pub sol: Option<u32>,
    /// First remote page requested (1-based)
    pub start_page: u32,
    /// Upper bound for a single fetch attempt
    pub fetch_timeout: Duration,
    /// Backoff policy for retryable fetch failures
    pub retry: RetryPolicy,
    /// Cards visible in the stack
    pub display_depth: usize,
    /// Commit threshold as a fraction of viewport width
    pub threshold_ratio: f64,
    /// Duration of the commit fly-out animation
    pub commit_duration: Duration,
    /// Spring used to return a cancelled card to center
    pub spring: SpringConfig,
    /// Redraw/tick interval of the event loop
    pub frame_interval: Duration,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            api_key: Some(DEFAULT_API_KEY.to_string()),
            sol: Some(DEFAULT_SOL),
            start_page: 1,
            fetch_timeout: Duration::from_secs(10),
            retry: RetryPolicy::default(),
            display_depth: DEFAULT_DISPLAY_DEPTH,
            threshold_ratio: DEFAULT_THRESHOLD_RATIO,
            commit_duration: Duration::from_millis(600),
            spring: SpringConfig::default(),
            frame_interval: Duration::from_millis(16),
        }
    }
}

impl DeckConfig {
    /// Create a new DeckConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Drop the `api_key` query parameter entirely.
    pub fn without_api_key(mut self) -> Self {
        self.api_key = None;
        self
    }

    pub fn with_sol(mut self, sol: u32) -> Self {
        self.sol = Some(sol);
        self
    }

    /// Drop the `sol` query parameter entirely.
    pub fn without_sol(mut self) -> Self {
        self.sol = None;
        self
    }

    pub fn with_start_page(mut self, page: u32) -> Self {
        self.start_page = page;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_display_depth(mut self, depth: usize) -> Self {
        self.display_depth = depth;
        self
    }

    pub fn with_threshold_ratio(mut self, ratio: f64) -> Self {
        self.threshold_ratio = ratio;
        self
    }

    pub fn with_commit_duration(mut self, duration: Duration) -> Self {
        self.commit_duration = duration;
        self
    }

    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    /// Build from defaults overridden by environment variables.
    ///
    /// Recognized: `MARSDECK_API_URL`, `MARSDECK_API_KEY`, `MARSDECK_SOL`,
    /// `MARSDECK_START_PAGE`, `MARSDECK_FETCH_TIMEOUT_SECS`. Unparseable
    /// numbers are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("MARSDECK_API_URL") {
            config = config.with_api_base_url(url);
        }
        if let Ok(key) = std::env::var("MARSDECK_API_KEY") {
            config = if key.is_empty() {
                config.without_api_key()
            } else {
                config.with_api_key(key)
            };
        }
        if let Some(sol) = env_number::<u32>("MARSDECK_SOL") {
            config = config.with_sol(sol);
        }
        if let Some(page) = env_number::<u32>("MARSDECK_START_PAGE") {
            config = config.with_start_page(page);
        }
        if let Some(secs) = env_number::<u64>("MARSDECK_FETCH_TIMEOUT_SECS") {
            config = config.with_fetch_timeout(Duration::from_secs(secs));
        }

        config
    }

    /// Reject settings the deck cannot run with.
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.start_page == 0 {
            return Err(DeckError::Config("pages start at 1".to_string()));
        }
        if self.display_depth == 0 {
            return Err(DeckError::Config(
                "display depth must be at least 1".to_string(),
            ));
        }
        if !(self.threshold_ratio > 0.0 && self.threshold_ratio <= 1.0) {
            return Err(DeckError::Config(format!(
                "threshold ratio {} is outside (0, 1]",
                self.threshold_ratio
            )));
        }
        if self.fetch_timeout.is_zero() {
            return Err(DeckError::Config("fetch timeout must be non-zero".to_string()));
        }
        Ok(())
    }
}

fn env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a number", name, raw);
            None
        }
    }
}
