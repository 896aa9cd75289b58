// src/modules/content/application/services/settings_service.rs

use std::sync::Arc;

use crate::modules::content::application::domain::SettingsSnapshot;
use crate::modules::resource::{json_fetcher, Resource, ResourceCache, ResourceOptions};
use crate::shared::api::ApiEndpoint;
use crate::shared::fetch::JsonFetcher;

/// Hands out subscriptions to the settings singleton. Every subscriber shares
/// the one cache entry keyed by the settings endpoint.
#[derive(Clone)]
pub struct SettingsService {
    cache: ResourceCache,
    fetcher: Arc<dyn JsonFetcher>,
    options: ResourceOptions,
}

impl SettingsService {
    pub fn new(cache: ResourceCache, fetcher: Arc<dyn JsonFetcher>, options: ResourceOptions) -> Self {
        Self {
            cache,
            fetcher,
            options,
        }
    }

    pub fn subscribe(&self) -> Resource<SettingsSnapshot> {
        let path = ApiEndpoint::Settings.path();
        self.cache.subscribe(
            path.clone(),
            json_fetcher(Arc::clone(&self.fetcher), path),
            self.options.clone(),
            Some(SettingsSnapshot::default()),
        )
    }
}
