// src/tests/support/stubs.rs

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use futures::FutureExt;
use serde_json::Value;

use crate::modules::resource::{FetchOutcome, Fetcher};
use crate::shared::fetch::{FetchError, JsonFetcher};

/* --------------------------------------------------
 * Cache fetchers
 * -------------------------------------------------- */

/// Fetcher whose reply depends on the 1-based call number. Every call sleeps
/// `delay` first so concurrent callers overlap.
pub fn counting_fetcher<F>(delay: Duration, respond: F) -> (Fetcher, Arc<AtomicUsize>)
where
    F: Fn(usize) -> FetchOutcome + Send + Sync + 'static,
{
    let calls = Arc::new(AtomicUsize::new(0));
    let respond = Arc::new(respond);
    let counter = Arc::clone(&calls);

    let fetcher: Fetcher = Arc::new(move || {
        let call = counter.fetch_add(1, Ordering::SeqCst) + 1;
        let respond = Arc::clone(&respond);
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            respond(call)
        }
        .boxed()
    });

    (fetcher, calls)
}

/* --------------------------------------------------
 * JsonFetcher stub
 * -------------------------------------------------- */

/// In-memory backend keyed by path. Unknown GET paths answer 404.
#[derive(Default)]
pub struct StubJsonFetcher {
    routes: Mutex<HashMap<String, FetchOutcome>>,
    posts: Mutex<Vec<(String, Value)>>,
    gets: AtomicUsize,
}

impl StubJsonFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(self, path: &str, outcome: FetchOutcome) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), outcome);
        self
    }

    pub fn posts(&self) -> Vec<(String, Value)> {
        self.posts.lock().unwrap().clone()
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JsonFetcher for StubJsonFetcher {
    async fn get_json(&self, path: &str) -> Result<Value, FetchError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.routes
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or(Err(FetchError::Http { status: 404 }))
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, FetchError> {
        self.posts
            .lock()
            .unwrap()
            .push((path.to_string(), body.clone()));
        self.routes
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or(Ok(Value::Null))
    }
}
