// src/shared/fetch/http_client.rs

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

use super::{FetchError, JsonFetcher};

// ============================================================================
// reqwest-backed JSON client
// ============================================================================

#[derive(Debug, Clone)]
pub struct HttpJsonClient {
    client: Client,
    base_url: String,
}

impl HttpJsonClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URLs pass through untouched (third-party relays); anything
    /// else is joined onto the API origin.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    async fn read_json(url: &str, response: Response) -> Result<Value, FetchError> {
        let status = response.status();
        if !status.is_success() {
            debug!(%url, status = status.as_u16(), "Request rejected");
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl JsonFetcher for HttpJsonClient {
    async fn get_json(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.url_for(path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Self::read_json(&url, response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, FetchError> {
        let url = self.url_for(path);
        debug!(%url, "POST");

        let payload = serde_json::to_vec(body).map_err(|e| FetchError::Decode(e.to_string()))?;

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Self::read_json(&url, response).await
    }
}
