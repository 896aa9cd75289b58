// src/modules/resource/cache.rs

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, warn};

use super::{Resource, ResourceOptions};
use crate::shared::api::unwrap_envelope;
use crate::shared::fetch::{FetchError, JsonFetcher};

pub type FetchOutcome = Result<Value, FetchError>;

/// Produces one request for a key. Called again for every retry and refresh.
pub type Fetcher = Arc<dyn Fn() -> BoxFuture<'static, FetchOutcome> + Send + Sync>;

type PendingRequest = Shared<BoxFuture<'static, FetchOutcome>>;

/// GETs `path` through `client`, unwrapping the API envelope.
pub fn json_fetcher(client: Arc<dyn JsonFetcher>, path: impl Into<String>) -> Fetcher {
    let path = path.into();
    Arc::new(move || {
        let client = Arc::clone(&client);
        let path = path.clone();
        async move { client.get_json(&path).await.map(unwrap_envelope) }.boxed()
    })
}

// ============================================================================
// Per-key state
// ============================================================================

/// What every subscriber of a key currently sees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceSnapshot {
    pub data: Option<Value>,
    pub error: Option<FetchError>,
    pub is_validating: bool,
    /// At least one request for this key has completed, successfully or not.
    pub resolved: bool,
}

struct InFlight {
    id: u64,
    pending: PendingRequest,
    task: AbortHandle,
}

struct Entry {
    fetcher: Fetcher,
    options: ResourceOptions,
    state: watch::Sender<ResourceSnapshot>,
    in_flight: Option<InFlight>,
    last_started: Option<Instant>,
    not_found: bool,
    subscribers: usize,
    poller: Option<JoinHandle<()>>,
}

impl Entry {
    fn new(fetcher: Fetcher, options: ResourceOptions) -> Self {
        let (state, _) = watch::channel(ResourceSnapshot::default());
        Self {
            fetcher,
            options,
            state,
            in_flight: None,
            last_started: None,
            not_found: false,
            subscribers: 0,
            poller: None,
        }
    }

    fn skip_reason(&self) -> Option<&'static str> {
        if self.not_found {
            return Some("not found earlier in this mount");
        }
        match self.last_started {
            Some(started) if started.elapsed() < self.options.deduping_window => {
                Some("within deduping window")
            }
            _ => None,
        }
    }
}

#[derive(Default)]
struct CacheInner {
    entries: Mutex<HashMap<String, Entry>>,
    next_request: AtomicU64,
}

// ============================================================================
// Cache
// ============================================================================

/// Keyed stale-while-revalidate cache shared by every component of a page.
///
/// Clones share state. Subscribing and revalidating spawn Tokio tasks, so both
/// must run inside a runtime. Cache writes only happen on request resolution.
#[derive(Clone, Default)]
pub struct ResourceCache {
    inner: Arc<CacheInner>,
}

impl fmt::Debug for ResourceCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceCache")
            .field("keys", &self.lock().len())
            .finish()
    }
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts a subscriber on `key`.
    ///
    /// The first subscriber starts the background poller (immediate fetch,
    /// then every `refresh_interval`); later ones request a non-forced
    /// revalidation, which the deduping window usually absorbs. The options
    /// and fetcher of the first subscriber govern the key until it unmounts.
    pub fn subscribe<T>(
        &self,
        key: impl Into<String>,
        fetcher: Fetcher,
        options: ResourceOptions,
        fallback: Option<T>,
    ) -> Resource<T>
    where
        T: DeserializeOwned + Clone,
    {
        let key = key.into();

        let receiver = {
            let mut entries = self.lock();
            let entry = entries
                .entry(key.clone())
                .or_insert_with(|| Entry::new(Arc::clone(&fetcher), options.clone()));

            entry.subscribers += 1;
            if entry.subscribers == 1 {
                entry.fetcher = fetcher;
                entry.options = options;
                entry.not_found = false;
                entry.poller = Some(self.spawn_poller(key.clone(), entry.options.refresh_interval));
            } else {
                let cache = self.clone();
                let key = key.clone();
                tokio::spawn(async move {
                    cache.revalidate(&key, false).await;
                });
            }

            entry.state.subscribe()
        };

        Resource::new(self.clone(), key, receiver, fallback)
    }

    /// Requests fresh data for `key`.
    ///
    /// Joins the in-flight request when there is one. Otherwise a non-forced
    /// call is skipped inside the deduping window or after a 404; a forced call
    /// always issues a request. Returns `None` for unknown keys and skips.
    pub async fn revalidate(&self, key: &str, force: bool) -> Option<FetchOutcome> {
        let pending = {
            let mut entries = self.lock();
            let entry = entries.get_mut(key)?;

            if let Some(in_flight) = &entry.in_flight {
                debug!(key, "Joining in-flight request");
                in_flight.pending.clone()
            } else {
                if !force {
                    if let Some(reason) = entry.skip_reason() {
                        debug!(key, reason, "Revalidation skipped");
                        return None;
                    }
                }
                self.launch(key, entry)
            }
        };

        Some(pending.await)
    }

    /// Window-focus hook: revalidates every mounted key that opted in.
    pub async fn revalidate_on_focus(&self) {
        let keys: Vec<String> = self
            .lock()
            .iter()
            .filter(|(_, entry)| entry.subscribers > 0 && entry.options.revalidate_on_focus)
            .map(|(key, _)| key.clone())
            .collect();

        futures::future::join_all(keys.iter().map(|key| self.revalidate(key, false))).await;
    }

    pub fn snapshot(&self, key: &str) -> Option<ResourceSnapshot> {
        self.lock()
            .get(key)
            .map(|entry| entry.state.borrow().clone())
    }

    pub fn subscriber_count(&self, key: &str) -> usize {
        self.lock().get(key).map_or(0, |entry| entry.subscribers)
    }

    pub(super) fn unsubscribe(&self, key: &str) {
        let mut entries = self.lock();
        let Some(entry) = entries.get_mut(key) else {
            return;
        };

        entry.subscribers = entry.subscribers.saturating_sub(1);
        if entry.subscribers == 0 {
            if let Some(poller) = entry.poller.take() {
                poller.abort();
            }
            // Pending retries die with the mount; cached data stays.
            if let Some(in_flight) = entry.in_flight.take() {
                in_flight.task.abort();
                entry.last_started = None;
                entry.state.send_modify(|s| s.is_validating = false);
            }
            entry.not_found = false;
            debug!(key, "Last subscriber left; background work stopped");
        }
    }

    fn spawn_poller(&self, key: String, every: Option<Duration>) -> JoinHandle<()> {
        let cache = self.clone();
        tokio::spawn(async move {
            cache.revalidate(&key, false).await;

            let Some(every) = every.filter(|d| !d.is_zero()) else {
                return;
            };
            let mut ticker = tokio::time::interval_at(Instant::now() + every, every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                cache.revalidate(&key, false).await;
            }
        })
    }

    /// Must be called with the entry lock held so `settle` cannot run first.
    fn launch(&self, key: &str, entry: &mut Entry) -> PendingRequest {
        let id = self.inner.next_request.fetch_add(1, Ordering::Relaxed);
        let cache = self.clone();
        let owned_key = key.to_string();
        let fetcher = Arc::clone(&entry.fetcher);
        let retry_count = entry.options.retry_count;
        let retry_delay = entry.options.retry_delay;

        // Spawned so the result lands in the cache even if every caller
        // awaiting it is dropped (e.g. the poller being aborted).
        let task = tokio::spawn(async move {
            let outcome = fetch_with_retry(&owned_key, fetcher, retry_count, retry_delay).await;
            cache.settle(&owned_key, id, &outcome);
            outcome
        });
        let abort = task.abort_handle();

        let pending = task
            .map(|joined| {
                joined.unwrap_or_else(|e| {
                    Err(FetchError::Network(format!("request task failed: {e}")))
                })
            })
            .boxed()
            .shared();

        entry.in_flight = Some(InFlight {
            id,
            pending: pending.clone(),
            task: abort,
        });
        entry.last_started = Some(Instant::now());
        entry.state.send_modify(|s| s.is_validating = true);

        pending
    }

    fn settle(&self, key: &str, id: u64, outcome: &FetchOutcome) {
        let mut entries = self.lock();
        let Some(entry) = entries.get_mut(key) else {
            return;
        };

        if matches!(&entry.in_flight, Some(in_flight) if in_flight.id == id) {
            entry.in_flight = None;
        }

        match outcome {
            Ok(value) => {
                let value = value.clone();
                entry.state.send_modify(move |s| {
                    s.data = Some(value);
                    s.error = None;
                    s.is_validating = false;
                    s.resolved = true;
                });
            }
            Err(err) => {
                if err.is_not_found() {
                    entry.not_found = true;
                }
                let err = err.clone();
                // Stale data stays visible; only the error changes.
                entry.state.send_modify(move |s| {
                    s.error = Some(err);
                    s.is_validating = false;
                    s.resolved = true;
                });
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.inner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

async fn fetch_with_retry(
    key: &str,
    fetcher: Fetcher,
    retry_count: u32,
    retry_delay: Duration,
) -> FetchOutcome {
    let mut attempt = 0;
    loop {
        match fetcher().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_not_found() => {
                debug!(key, "Resource not found; retries suppressed");
                return Err(err);
            }
            Err(err) if attempt < retry_count => {
                attempt += 1;
                warn!(
                    key,
                    attempt,
                    retry_count,
                    error = %err,
                    "Fetch failed, retrying"
                );
                tokio::time::sleep(retry_delay).await;
            }
            Err(err) => {
                warn!(key, error = %err, "Fetch failed, giving up until next refresh");
                return Err(err);
            }
        }
    }
}
