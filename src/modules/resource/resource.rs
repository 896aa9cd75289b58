// src/modules/resource/resource.rs

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::watch;
use tracing::warn;

use super::{ResourceCache, ResourceSnapshot};
use crate::shared::fetch::FetchError;

/// A mounted subscription to one cache key. Dropping it unmounts.
pub struct Resource<T> {
    cache: ResourceCache,
    key: String,
    state: watch::Receiver<ResourceSnapshot>,
    fallback: Option<T>,
}

impl<T> Resource<T>
where
    T: DeserializeOwned + Clone,
{
    pub(super) fn new(
        cache: ResourceCache,
        key: String,
        state: watch::Receiver<ResourceSnapshot>,
        fallback: Option<T>,
    ) -> Self {
        Self {
            cache,
            key,
            state,
            fallback,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Latest resolved value for the key, else the fallback.
    pub fn data(&self) -> Option<T> {
        let snapshot = self.state.borrow();
        snapshot
            .data
            .as_ref()
            .and_then(|value| self.decode(value))
            .or_else(|| self.fallback.clone())
    }

    pub fn has_data(&self) -> bool {
        self.state.borrow().data.is_some()
    }

    /// First load still pending: nothing cached yet and a request running.
    pub fn is_loading(&self) -> bool {
        let snapshot = self.state.borrow();
        snapshot.data.is_none() && !snapshot.resolved
    }

    pub fn is_validating(&self) -> bool {
        self.state.borrow().is_validating
    }

    pub fn is_resolved(&self) -> bool {
        self.state.borrow().resolved
    }

    pub fn error(&self) -> Option<FetchError> {
        self.state.borrow().error.clone()
    }

    pub fn snapshot(&self) -> ResourceSnapshot {
        self.state.borrow().clone()
    }

    /// Forces a refetch and returns the data every subscriber now sees.
    pub async fn mutate(&self) -> Option<T> {
        self.cache.revalidate(&self.key, true).await;
        self.data()
    }

    /// Waits for the next state change. `false` once the cache entry is gone.
    pub async fn changed(&mut self) -> bool {
        self.state.changed().await.is_ok()
    }

    fn decode(&self, value: &Value) -> Option<T> {
        match serde_json::from_value(value.clone()) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Cached payload has unexpected shape");
                None
            }
        }
    }
}

impl<T> Drop for Resource<T> {
    fn drop(&mut self) {
        self.cache.unsubscribe(&self.key);
    }
}
