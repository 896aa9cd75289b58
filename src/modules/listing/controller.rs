// src/modules/listing/controller.rs

use std::collections::BTreeSet;
use std::future::Future;

use tracing::warn;

use crate::modules::content::application::ports::outgoing::ContentQueryError;
use crate::modules::listing::filter::{derive_view, FilterState, Listable, SortBy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Backs a list screen (blog reader, testimonial wall): holds the fetched
/// source and re-derives the rendered view from it on every read.
#[derive(Debug, Clone)]
pub struct ListingController<T> {
    source: Vec<T>,
    state: LoadState,
    filter: FilterState,
    sort: SortBy,
}

impl<T> Default for ListingController<T> {
    fn default() -> Self {
        Self {
            source: Vec::new(),
            state: LoadState::Loading,
            filter: FilterState::default(),
            sort: SortBy::default(),
        }
    }
}

impl<T> ListingController<T>
where
    T: Listable + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<F>(&mut self, fetch: F) -> &LoadState
    where
        F: Future<Output = Result<Vec<T>, ContentQueryError>>,
    {
        self.state = LoadState::Loading;
        self.apply(fetch.await)
    }

    pub fn apply(&mut self, result: Result<Vec<T>, ContentQueryError>) -> &LoadState {
        match result {
            Ok(items) => {
                self.source = items;
                self.state = LoadState::Ready;
            }
            Err(e) => {
                // Records from an earlier load stay on screen.
                warn!(error = %e, kept = self.source.len(), "Failed to load listing");
                self.state = LoadState::Failed(e.to_string());
            }
        }
        &self.state
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> SortBy {
        self.sort
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    pub fn set_category(&mut self, category: &str) {
        self.filter.category = category.into();
    }

    pub fn set_rating(&mut self, rating: Option<u8>) {
        self.filter.rating = rating;
    }

    pub fn set_sort(&mut self, sort: SortBy) {
        self.sort = sort;
    }

    pub fn view(&self) -> Vec<T> {
        derive_view(&self.source, &self.filter, self.sort)
    }

    /// Distinct categories of the visible records, sorted, for filter chips.
    pub fn categories(&self) -> Vec<String> {
        self.source
            .iter()
            .filter(|item| item.is_visible())
            .filter_map(|item| item.category())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// The error notice replaces the list only when nothing was ever loaded.
    pub fn shows_error_notice(&self) -> bool {
        matches!(self.state, LoadState::Failed(_)) && self.source.is_empty()
    }

    /// Last reload failed but earlier records are still shown.
    pub fn is_stale(&self) -> bool {
        matches!(self.state, LoadState::Failed(_)) && !self.source.is_empty()
    }

    /// Empty-state message applies only once loading finished without error.
    pub fn is_empty(&self) -> bool {
        self.state == LoadState::Ready && self.view().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::domain::{BlogPost, Testimonial};
    use crate::modules::listing::filter::CategoryFilter;
    use crate::tests::support::fixtures::{blog_post, testimonial};

    fn posts() -> Vec<BlogPost> {
        vec![
            blog_post("1", "Rust", "2024-01-01T00:00:00Z", true),
            blog_post("2", "Career", "2024-02-01T00:00:00Z", true),
            blog_post("3", "Rust", "2024-03-01T00:00:00Z", true),
            blog_post("4", "Secret", "2024-04-01T00:00:00Z", false),
        ]
    }

    #[test]
    fn starts_loading_without_notices() {
        let listing: ListingController<BlogPost> = ListingController::new();

        assert!(listing.is_loading());
        assert!(!listing.shows_error_notice());
        assert!(!listing.is_empty());
        assert!(listing.view().is_empty());
    }

    #[tokio::test]
    async fn load_then_filter_and_sort() {
        let mut listing = ListingController::new();
        listing.load(async { Ok(posts()) }).await;

        assert_eq!(listing.state(), &LoadState::Ready);
        let ids: Vec<String> = listing.view().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);

        listing.set_category("Rust");
        listing.set_sort(SortBy::Oldest);
        let ids: Vec<String> = listing.view().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "3"]);

        listing.set_category("ALL");
        assert_eq!(listing.filter().category, CategoryFilter::All);
        assert_eq!(listing.view().len(), 3);
    }

    #[tokio::test]
    async fn categories_skip_hidden_records() {
        let mut listing = ListingController::new();
        listing.load(async { Ok(posts()) }).await;

        assert_eq!(listing.categories(), vec!["Career", "Rust"]);
    }

    #[tokio::test]
    async fn failure_shows_notice_not_empty_state() {
        let mut listing: ListingController<Testimonial> = ListingController::new();
        listing
            .load(async { Err(ContentQueryError::Unavailable("Network error: refused".into())) })
            .await;

        assert!(listing.shows_error_notice());
        assert!(!listing.is_stale());
        assert!(!listing.is_empty());
        assert!(listing.view().is_empty());
    }

    #[tokio::test]
    async fn failed_reload_keeps_loaded_records() {
        let mut listing = ListingController::new();
        listing.load(async { Ok(posts()) }).await;

        listing
            .load(async { Err(ContentQueryError::Unavailable("Network error: reset".into())) })
            .await;

        assert!(matches!(listing.state(), LoadState::Failed(_)));
        assert_eq!(listing.view().len(), 3);
        assert!(listing.is_stale());
        assert!(!listing.shows_error_notice());
        assert!(!listing.is_empty());
        assert_eq!(listing.categories(), vec!["Career", "Rust"]);
    }

    #[tokio::test]
    async fn filter_with_no_matches_is_empty_state() {
        let mut listing = ListingController::new();
        listing
            .load(async {
                Ok(vec![
                    testimonial("a", 4, "2024-01-01T00:00:00Z", true),
                    testimonial("b", 5, "2024-02-01T00:00:00Z", false),
                ])
            })
            .await;

        listing.set_rating(Some(5));

        assert!(listing.is_empty());
        assert!(!listing.shows_error_notice());
    }
}
