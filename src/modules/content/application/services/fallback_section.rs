// src/modules/content/application/services/fallback_section.rs

use std::cmp::Ordering;
use std::future::Future;

use tracing::{debug, warn};

use crate::modules::content::application::domain::ContentItem;
use crate::modules::content::application::ports::outgoing::ContentQueryError;

/// Per-section ordering convention for live data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionOrder {
    /// `priorityOrder` ascending; unranked records go last.
    Priority,
    /// `created_at` descending; undated records go last.
    Newest,
    /// Keep the server's order (already-curated endpoints).
    AsReturned,
}

// ============================================================================
// Fallback-first section
// ============================================================================

/// Renders static defaults immediately and swaps in live data only when a
/// fetch yields at least one visible record. Failures are swallowed.
#[derive(Debug, Clone)]
pub struct FallbackSection<T> {
    name: &'static str,
    defaults: Vec<T>,
    items: Vec<T>,
    order: SectionOrder,
    limit: Option<usize>,
    live: bool,
}

impl<T> FallbackSection<T>
where
    T: ContentItem + Clone,
{
    pub fn new(name: &'static str, defaults: Vec<T>, order: SectionOrder) -> Self {
        let defaults: Vec<T> = defaults.into_iter().filter(|i| i.is_visible()).collect();
        Self {
            name,
            items: defaults.clone(),
            defaults,
            order,
            limit: None,
            live: false,
        }
    }

    /// Caps the rendered collection after filtering and ordering.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self.items.truncate(limit);
        self
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn defaults(&self) -> &[T] {
        &self.defaults
    }

    /// Whether live data has replaced the defaults at least once.
    pub fn is_live(&self) -> bool {
        self.live
    }

    pub async fn refresh<F>(&mut self, fetch: F) -> bool
    where
        F: Future<Output = Result<Vec<T>, ContentQueryError>>,
    {
        self.apply(fetch.await)
    }

    /// Returns `true` when the rendered collection was replaced.
    pub fn apply(&mut self, result: Result<Vec<T>, ContentQueryError>) -> bool {
        let fetched = match result {
            Ok(fetched) => fetched,
            Err(ContentQueryError::NotFound) => {
                debug!(section = self.name, "Section endpoint not found; keeping current items");
                return false;
            }
            Err(e) => {
                warn!(section = self.name, error = %e, "Section fetch failed; keeping current items");
                return false;
            }
        };

        let mut visible: Vec<T> = fetched.into_iter().filter(|i| i.is_visible()).collect();
        if visible.is_empty() {
            debug!(section = self.name, "No visible live items; keeping current items");
            return false;
        }

        self.sort(&mut visible);
        if let Some(limit) = self.limit {
            visible.truncate(limit);
        }

        self.items = visible;
        self.live = true;
        true
    }

    fn sort(&self, items: &mut [T]) {
        match self.order {
            SectionOrder::Priority => {
                items.sort_by(|a, b| last_if_none(a.priority_order(), b.priority_order(), false))
            }
            SectionOrder::Newest => {
                items.sort_by(|a, b| last_if_none(a.created_at(), b.created_at(), true))
            }
            SectionOrder::AsReturned => {}
        }
    }
}

/// Orders `Some` values (ascending, or descending when `reverse`) ahead of `None`.
pub(crate) fn last_if_none<K: Ord>(a: Option<K>, b: Option<K>, reverse: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if reverse => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::domain::{Service, Testimonial};
    use crate::tests::support::fixtures::{service, testimonial};

    fn defaults() -> Vec<Service> {
        vec![service("d1", "Web Development", 1), service("d2", "Consulting", 2)]
    }

    #[test]
    fn renders_defaults_before_any_fetch() {
        let section = FallbackSection::new("services", defaults(), SectionOrder::Priority);

        assert_eq!(section.items(), defaults().as_slice());
        assert!(!section.is_live());
    }

    #[test]
    fn replaces_with_visible_items_in_priority_order() {
        let mut section = FallbackSection::new("services", defaults(), SectionOrder::Priority);
        let mut hidden = service("x", "Hidden", 0);
        hidden.status = Some("Inactive".to_string());
        let mut unranked = service("u", "Unranked", 0);
        unranked.priority_order = None;

        let replaced = section.apply(Ok(vec![
            service("c", "Third", 3),
            unranked,
            hidden,
            service("a", "First", 1),
        ]));

        assert!(replaced);
        assert!(section.is_live());
        let ids: Vec<&str> = section.items().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "u"]);
    }

    #[test]
    fn empty_success_keeps_defaults() {
        let mut section = FallbackSection::new("services", defaults(), SectionOrder::Priority);

        assert!(!section.apply(Ok(vec![])));
        assert_eq!(section.items(), defaults().as_slice());
    }

    #[test]
    fn all_hidden_success_keeps_defaults() {
        let mut section = FallbackSection::new("services", defaults(), SectionOrder::Priority);
        let mut hidden = service("x", "Hidden", 1);
        hidden.status = None;

        assert!(!section.apply(Ok(vec![hidden])));
        assert_eq!(section.items(), defaults().as_slice());
    }

    #[test]
    fn failure_keeps_defaults_silently() {
        let mut section = FallbackSection::new("services", defaults(), SectionOrder::Priority);

        assert!(!section.apply(Err(ContentQueryError::Unavailable("HTTP error! status: 500".into()))));
        assert_eq!(section.items(), defaults().as_slice());
        assert!(!section.is_live());
    }

    #[test]
    fn failure_after_live_data_keeps_live_data() {
        let mut section = FallbackSection::new("services", defaults(), SectionOrder::Priority);
        section.apply(Ok(vec![service("live", "Live", 1)]));

        section.apply(Err(ContentQueryError::Unavailable("timeout".into())));

        assert_eq!(section.items()[0].id, "live");
    }

    #[test]
    fn newest_order_then_limit() {
        let mut section: FallbackSection<Testimonial> =
            FallbackSection::new("testimonials", vec![], SectionOrder::Newest).with_limit(2);

        section.apply(Ok(vec![
            testimonial("old", 5, "2023-01-01T00:00:00Z", true),
            testimonial("new", 4, "2024-06-01T00:00:00Z", true),
            testimonial("mid", 3, "2023-09-01T00:00:00Z", true),
            testimonial("pending", 5, "2025-01-01T00:00:00Z", false),
        ]));

        let ids: Vec<&str> = section.items().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid"]);
    }

    #[tokio::test]
    async fn refresh_awaits_the_fetch() {
        let mut section = FallbackSection::new("services", defaults(), SectionOrder::AsReturned);

        let replaced = section
            .refresh(async { Ok(vec![service("b", "B", 9), service("a", "A", 1)]) })
            .await;

        assert!(replaced);
        let ids: Vec<&str> = section.items().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
