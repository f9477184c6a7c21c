//! HTTP client for end-to-end tests
//!
//! This module provides a thin wrapper over reqwest with one method per
//! dashboard endpoint.
//!
//! When API routes change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /
    pub async fn get_home(&self) -> Response {
        self.get("/").await
    }

    /// GET /v1/pages
    pub async fn get_navigation(&self) -> Response {
        self.get("/v1/pages").await
    }

    /// GET /v1/pages/{key}
    pub async fn get_page(&self, key: &str) -> Response {
        self.get(&format!("/v1/pages/{}", key)).await
    }

    /// GET /v1/route?path=...
    pub async fn route(&self, path: &str) -> Response {
        self.client
            .get(format!("{}/v1/route", self.base_url))
            .query(&[("path", path)])
            .send()
            .await
            .expect("Route request failed")
    }

    /// GET /v1/summary
    pub async fn get_summary(&self) -> Response {
        self.get("/v1/summary").await
    }

    /// GET /v1/filters
    pub async fn get_filters(&self) -> Response {
        self.get("/v1/filters").await
    }
}
