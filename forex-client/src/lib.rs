//! # Forex Client SDK
//!
//! A typed Rust client for the forex rates JSON endpoints.

use forex_types::{MessageResponse, Rate, RatePatch, StoredRate};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Forex rates API client.
pub struct ForexClient {
    base_url: String,
    http: Client,
}

impl ForexClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Lists all rates with their storage keys.
    pub async fn list_rates(&self) -> Result<Vec<StoredRate>, ClientError> {
        self.send(self.http.get(self.url("/api/rates"))).await
    }

    /// Creates a rate, replacing any rate with the same code.
    pub async fn add_rate(&self, rate: &Rate) -> Result<MessageResponse, ClientError> {
        self.send(self.http.post(self.url("/add-currency")).json(rate))
            .await
    }

    /// Merges the supplied fields into the rate stored under `id`.
    pub async fn update_rate(
        &self,
        id: &str,
        patch: &RatePatch,
    ) -> Result<MessageResponse, ClientError> {
        let url = self.keyed_url("/update-currency", id)?;
        self.send(self.http.put(url).json(patch)).await
    }

    /// Deletes the rate stored under `id`.
    pub async fn delete_rate(&self, id: &str) -> Result<MessageResponse, ClientError> {
        let url = self.keyed_url("/delete-currency", id)?;
        self.send(self.http.delete(url)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Appends a storage key as one percent-encoded path segment.
    fn keyed_url(&self, path: &str, id: &str) -> Result<Url, ClientError> {
        let mut url =
            Url::parse(&self.url(path)).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .push(id);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ClientError> {
        let resp = req.send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
