//! HTTP-backed photo source.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::retry::RetryPolicy;
use crate::config::DeckConfig;
use crate::error::FetchError;
use crate::models::{Photo, PhotoPage};
use crate::traits::{Headers, HttpClient, PhotoSource};

/// Photo source speaking the Mars Rover Photos page format.
///
/// Every attempt is bounded by `fetch_timeout`; retryable failures are
/// retried according to the [`RetryPolicy`]. The last failure is returned
/// once the policy is exhausted.
pub struct ApiPhotoSource<C: HttpClient> {
    client: Arc<C>,
    base_url: String,
    api_key: Option<String>,
    sol: Option<u32>,
    fetch_timeout: Duration,
    retry: RetryPolicy,
}

impl<C: HttpClient> ApiPhotoSource<C> {
    pub fn new(client: Arc<C>, config: &DeckConfig) -> Self {
        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            sol: config.sol,
            fetch_timeout: config.fetch_timeout,
            retry: config.retry.clone(),
        }
    }

    /// URL of the given page.
    pub fn page_url(&self, page: u32) -> String {
        let mut url = format!("{}/photos?page={}", self.base_url, page);
        if let Some(sol) = self.sol {
            url.push_str(&format!("&sol={}", sol));
        }
        if let Some(key) = &self.api_key {
            url.push_str(&format!("&api_key={}", urlencoding::encode(key)));
        }
        url
    }

    async fn fetch_once(&self, page: u32, url: &str) -> Result<Vec<Photo>, FetchError> {
        let response = tokio::time::timeout(self.fetch_timeout, self.client.get(url, &Headers::new()))
            .await
            .map_err(|_| FetchError::Timeout {
                page,
                secs: self.fetch_timeout.as_secs(),
            })??;

        if !response.is_success() {
            let message = response
                .text()
                .unwrap_or_default()
                .chars()
                .take(200)
                .collect();
            return Err(FetchError::HttpStatus {
                status: response.status,
                message,
            });
        }

        let page: PhotoPage = response.json()?;
        Ok(page.photos)
    }
}

#[async_trait]
impl<C: HttpClient> PhotoSource for ApiPhotoSource<C> {
    async fn fetch_photos(&self, page: u32) -> Result<Vec<Photo>, FetchError> {
        let url = self.page_url(page);
        let mut attempt = 1;

        loop {
            tracing::debug!(page, attempt, "Fetching photo page");
            match self.fetch_once(page, &url).await {
                Ok(photos) => {
                    tracing::info!(page, count = photos.len(), "Fetched photo page");
                    return Ok(photos);
                }
                Err(err) => {
                    let backoff = if err.is_retryable() {
                        self.retry.backoff_after(attempt)
                    } else {
                        None
                    };

                    match backoff {
                        Some(delay) => {
                            tracing::warn!(
                                page,
                                attempt,
                                code = err.error_code(),
                                "Fetch failed ({}), retrying in {:?}",
                                err,
                                delay
                            );
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                        }
                        None => {
                            tracing::error!(
                                page,
                                attempt,
                                code = err.error_code(),
                                "Fetch failed: {}",
                                err
                            );
                            return Err(err);
                        }
                    }
                }
            }
        }
    }
}
