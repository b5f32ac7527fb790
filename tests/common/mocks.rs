//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `marsdeck::adapters::mock` and adds builder
//! helpers for canned HTTP responses.

#![allow(dead_code)]

pub use marsdeck::adapters::mock::{MockHttpClient, MockResponse, ScriptedPhotoSource};
pub use marsdeck::traits::{Headers, HttpClient, HttpError, Response};

use bytes::Bytes;

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Configures a successful JSON response.
    pub fn with_json_response(self, url: &str, status: u16, json: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Success(Response::new(status, Bytes::from(json.to_string()))),
        );
        self
    }

    /// Configures a transport error.
    pub fn with_error_response(self, url: &str, error: HttpError) -> Self {
        self.client.set_response(url, MockResponse::Error(error));
        self
    }

    /// Configures a default success response for unmatched URLs.
    pub fn with_default_success(self, status: u16, body: &str) -> Self {
        self.client
            .set_default_response(MockResponse::Success(Response::new(
                status,
                Bytes::from(body.to_string()),
            )));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON body of a photo page with the given ids.
pub fn page_json(ids: &[u64]) -> String {
    let photos: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "sol": 1000,
                "img_src": format!("https://mars.example.com/{}.jpg", id),
                "earth_date": "2015-05-30"
            })
        })
        .collect();
    serde_json::json!({ "photos": photos }).to_string()
}
