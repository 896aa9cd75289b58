// src/modules/seo/service.rs

use std::sync::Arc;

use super::metadata::{normalize_route, resolve_seo, ResolvedSeo, SeoDefaults, SeoOverrides, SeoRecord};
use crate::modules::resource::{json_fetcher, Resource, ResourceCache, ResourceOptions};
use crate::shared::api::ApiEndpoint;
use crate::shared::fetch::JsonFetcher;

/// Per-route SEO lookups through the shared cache.
#[derive(Clone)]
pub struct SeoService {
    cache: ResourceCache,
    fetcher: Arc<dyn JsonFetcher>,
    options: ResourceOptions,
    defaults: Arc<SeoDefaults>,
}

impl SeoService {
    pub fn new(
        cache: ResourceCache,
        fetcher: Arc<dyn JsonFetcher>,
        options: ResourceOptions,
        defaults: SeoDefaults,
    ) -> Self {
        Self {
            cache,
            fetcher,
            options,
            defaults: Arc::new(defaults),
        }
    }

    pub fn defaults(&self) -> &SeoDefaults {
        &self.defaults
    }

    pub fn watch(&self, route: &str) -> RouteSeo {
        let route = normalize_route(route);
        let path = ApiEndpoint::Seo(route.clone()).path();
        let record = self.cache.subscribe(
            path.clone(),
            json_fetcher(Arc::clone(&self.fetcher), path),
            self.options.clone(),
            None,
        );

        RouteSeo {
            route,
            record,
            defaults: Arc::clone(&self.defaults),
        }
    }
}

/// A mounted page's view of its SEO record.
pub struct RouteSeo {
    route: String,
    record: Resource<Option<SeoRecord>>,
    defaults: Arc<SeoDefaults>,
}

impl RouteSeo {
    pub fn route(&self) -> &str {
        &self.route
    }

    /// `None` while the very first lookup for the route is pending. Once any
    /// value is cached, or the lookup settled (a 404 included), the merged
    /// record is always returned, stale or not.
    pub fn head(&self, overrides: &SeoOverrides) -> Option<ResolvedSeo> {
        if self.record.is_loading() {
            return None;
        }
        let fetched = self.record.data().flatten();
        Some(resolve_seo(&self.route, &self.defaults, fetched.as_ref(), overrides))
    }

    /// Resolves once the state changes; `false` when the cache entry is gone.
    pub async fn changed(&mut self) -> bool {
        self.record.changed().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    use crate::shared::fetch::FetchError;
    use crate::tests::support::stubs::StubJsonFetcher;

    fn service(backend: Arc<StubJsonFetcher>) -> SeoService {
        let mut defaults = SeoDefaults::new("Ada", "https://ada.dev", "Ada");
        defaults.meta_title = "Default".into();
        defaults.meta_description = "D".into();
        SeoService::new(
            ResourceCache::new(),
            backend,
            ResourceOptions::slow_changing(Duration::from_secs(600)),
            defaults,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn suppresses_output_until_first_resolution() {
        let backend = Arc::new(
            StubJsonFetcher::new().with_route("/api/seo/%2Fabout", Ok(json!({ "metaTitle": "X" }))),
        );
        let seo = service(backend);

        let page = seo.watch("/about/");
        assert_eq!(page.route(), "/about");
        assert!(page.head(&SeoOverrides::none()).is_none());

        tokio::time::sleep(Duration::from_millis(10)).await;

        let head = page.head(&SeoOverrides::none()).unwrap();
        assert_eq!(head.meta_title, "X");
        assert_eq!(head.meta_description, "D");
    }

    #[tokio::test(start_paused = true)]
    async fn remount_renders_cached_value_immediately() {
        let backend = Arc::new(StubJsonFetcher::new().with_route(
            "/api/seo/%2Fprojects",
            Ok(json!({ "success": true, "data": { "metaTitle": "Work" } })),
        ));
        let seo = service(backend);

        let first = seo.watch("/projects");
        tokio::time::sleep(Duration::from_millis(10)).await;
        drop(first);

        let again = seo.watch("projects");
        assert_eq!(again.head(&SeoOverrides::none()).unwrap().meta_title, "Work");
    }

    #[tokio::test(start_paused = true)]
    async fn missing_record_uses_defaults_without_retrying() {
        let backend = Arc::new(StubJsonFetcher::new().with_route(
            "/api/seo/%2Fcontact",
            Err(FetchError::Http { status: 404 }),
        ));
        let seo = service(backend.clone());

        let page = seo.watch("/contact");
        tokio::time::sleep(Duration::from_secs(60)).await;

        let head = page.head(&SeoOverrides::none().title("Contact")).unwrap();
        assert_eq!(head.meta_title, "Contact");
        assert_eq!(head.meta_description, "D");
        assert_eq!(backend.get_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn null_payload_falls_back_to_defaults() {
        let backend =
            Arc::new(StubJsonFetcher::new().with_route("/api/seo/%2F", Ok(serde_json::Value::Null)));
        let seo = service(backend);

        let page = seo.watch("/");
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(page.head(&SeoOverrides::none()).unwrap().meta_title, "Default");
    }
}
