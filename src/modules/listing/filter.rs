// src/modules/listing/filter.rs

use serde::Deserialize;

use crate::modules::content::application::domain::{BlogPost, ContentItem, Project, Testimonial};
use crate::modules::content::application::services::fallback_section::last_if_none;

/// Records a list screen can filter by category or rating.
pub trait Listable: ContentItem {
    fn category(&self) -> Option<&str> {
        None
    }

    fn rating(&self) -> Option<u8> {
        None
    }
}

impl Listable for BlogPost {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl Listable for Project {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl Listable for Testimonial {
    fn rating(&self) -> Option<u8> {
        self.rating
    }
}

//
// ──────────────────────────────────────────────────────────
// Filter & sort state
// ──────────────────────────────────────────────────────────
//

/// `"all"` in any casing is the no-filter sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Exact(String),
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Exact(value.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub category: CategoryFilter,
    /// Exact star rating; `None` keeps every rating.
    pub rating: Option<u8>,
}

impl FilterState {
    pub fn category(value: &str) -> Self {
        Self {
            category: CategoryFilter::from(value),
            rating: None,
        }
    }

    pub fn rating(stars: u8) -> Self {
        Self {
            category: CategoryFilter::All,
            rating: Some(stars),
        }
    }

    fn matches<T: Listable>(&self, item: &T) -> bool {
        let category_ok = match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Exact(wanted) => item.category() == Some(wanted.as_str()),
        };
        let rating_ok = match self.rating {
            None => true,
            Some(stars) => item.rating() == Some(stars),
        };
        category_ok && rating_ok
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Newest,
    Oldest,
    #[serde(alias = "rating", alias = "highest")]
    HighestRated,
}

/// Derives the ordered subset to render. Always starts from the full source,
/// hidden records are dropped first, and `items` is never touched.
pub fn derive_view<T>(items: &[T], filter: &FilterState, sort: SortBy) -> Vec<T>
where
    T: Listable + Clone,
{
    let mut view: Vec<T> = items
        .iter()
        .filter(|item| item.is_visible())
        .filter(|item| filter.matches(*item))
        .cloned()
        .collect();

    match sort {
        SortBy::Newest => view.sort_by(|a, b| last_if_none(a.created_at(), b.created_at(), true)),
        SortBy::Oldest => view.sort_by(|a, b| last_if_none(a.created_at(), b.created_at(), false)),
        SortBy::HighestRated => view.sort_by(|a, b| {
            last_if_none(a.rating(), b.rating(), true)
                .then_with(|| last_if_none(a.created_at(), b.created_at(), true))
        }),
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{blog_post, testimonial};

    fn posts() -> Vec<BlogPost> {
        vec![
            blog_post("b", "Rust", "2024-02-01T00:00:00Z", true),
            blog_post("draft", "Rust", "2024-09-01T00:00:00Z", false),
            blog_post("a", "Career", "2023-05-01T00:00:00Z", true),
            blog_post("c", "Rust", "2024-07-01T00:00:00Z", true),
        ]
    }

    fn ids(view: &[BlogPost]) -> Vec<&str> {
        view.iter().map(|p| p.id.as_str()).collect()
    }

    fn testimonial_ids(view: &[Testimonial]) -> Vec<&str> {
        view.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn default_sort_is_newest_first_and_drops_unpublished() {
        let view = derive_view(&posts(), &FilterState::default(), SortBy::default());
        assert_eq!(ids(&view), vec!["c", "b", "a"]);
    }

    #[test]
    fn all_sentinel_with_oldest_returns_everything_ascending() {
        let view = derive_view(&posts(), &FilterState::category("all"), SortBy::Oldest);
        assert_eq!(ids(&view), vec!["a", "b", "c"]);

        let view = derive_view(&posts(), &FilterState::category("All"), SortBy::Oldest);
        assert_eq!(ids(&view), vec!["a", "b", "c"]);
    }

    #[test]
    fn category_filter_is_exact() {
        let view = derive_view(&posts(), &FilterState::category("Rust"), SortBy::Newest);
        assert_eq!(ids(&view), vec!["c", "b"]);

        let view = derive_view(&posts(), &FilterState::category("rust"), SortBy::Newest);
        assert!(view.is_empty());
    }

    #[test]
    fn output_only_contains_visible_items_for_any_mix() {
        let flags = [true, false, true, false, false, true, true];
        let mixed: Vec<Testimonial> = flags
            .iter()
            .enumerate()
            .map(|(i, approved)| {
                testimonial(&format!("t{i}"), (i % 5 + 1) as u8, "2024-01-01T00:00:00Z", *approved)
            })
            .collect();

        for sort in [SortBy::Newest, SortBy::Oldest, SortBy::HighestRated] {
            let view = derive_view(&mixed, &FilterState::default(), sort);
            assert_eq!(view.len(), 4);
            assert!(view.iter().all(|t| t.is_approved));
        }
    }

    #[test]
    fn rating_filter_and_sort() {
        let items = vec![
            testimonial("four", 4, "2024-01-01T00:00:00Z", true),
            testimonial("five-old", 5, "2023-01-01T00:00:00Z", true),
            testimonial("five-new", 5, "2024-03-01T00:00:00Z", true),
            testimonial("three", 3, "2024-05-01T00:00:00Z", true),
        ];

        let best = derive_view(&items, &FilterState::default(), SortBy::HighestRated);
        assert_eq!(testimonial_ids(&best), vec!["five-new", "five-old", "four", "three"]);

        let fives = derive_view(&items, &FilterState::rating(5), SortBy::Oldest);
        assert_eq!(testimonial_ids(&fives), vec!["five-old", "five-new"]);
    }

    #[test]
    fn repeated_derivation_does_not_drift() {
        let source = posts();
        let first = derive_view(&source, &FilterState::category("Rust"), SortBy::Oldest);
        let _ = derive_view(&source, &FilterState::default(), SortBy::Newest);
        let again = derive_view(&source, &FilterState::category("Rust"), SortBy::Oldest);

        assert_eq!(first, again);
        assert_eq!(source, posts());
    }

    #[test]
    fn undated_items_sort_last() {
        let mut undated = blog_post("undated", "Rust", "2024-01-01T00:00:00Z", true);
        undated.created_at = None;
        let items = vec![undated, blog_post("dated", "Rust", "2020-01-01T00:00:00Z", true)];

        assert_eq!(
            ids(&derive_view(&items, &FilterState::default(), SortBy::Oldest)),
            vec!["dated", "undated"]
        );
        assert_eq!(
            ids(&derive_view(&items, &FilterState::default(), SortBy::Newest)),
            vec!["dated", "undated"]
        );
    }

    #[test]
    fn sort_keys_deserialize_from_query_values() {
        let parsed: SortBy = serde_json::from_str("\"oldest\"").unwrap();
        assert_eq!(parsed, SortBy::Oldest);
        let parsed: SortBy = serde_json::from_str("\"rating\"").unwrap();
        assert_eq!(parsed, SortBy::HighestRated);
    }
}
