// src/shared/fetch/mod.rs

mod error;
mod http_client;

use async_trait::async_trait;
use serde_json::Value;

pub use error::FetchError;
pub use http_client::HttpJsonClient;

//
// ──────────────────────────────────────────────────────────
// Outgoing Port
// ──────────────────────────────────────────────────────────
//

/// One network call per invocation. No retries and no caching happen here;
/// callers own that policy.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, FetchError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, FetchError>;
}
